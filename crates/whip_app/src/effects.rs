use whip_core::Effect;
use whip_engine::EngineHandle;

/// Write-only clipboard capability, behind a trait so tests can observe
/// writes without touching the system clipboard.
pub trait ClipboardSink {
    fn write(&mut self, text: &str);
}

/// System clipboard via arboard. A failed write is logged and otherwise
/// ignored; the resolved URL is still on screen.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        {
            Ok(()) => log::info!("copied to clipboard: {text}"),
            Err(err) => log::warn!("clipboard write failed: {err}"),
        }
    }
}

/// Executes the commands produced by the state machine. Returns true once
/// a `Quit` was seen and the event loop should end.
pub fn run_effects<C: ClipboardSink>(
    effects: Vec<Effect>,
    engine: &EngineHandle,
    clipboard: &mut C,
) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::StartLookup { source_url } => {
                log::info!("lookup requested for {source_url}");
                engine.start_lookup(source_url);
            }
            Effect::StartExtraction {
                canonical_url,
                platform,
            } => {
                log::info!("extracting {} link from {canonical_url}", platform.slug);
                engine.start_extraction(canonical_url, platform);
            }
            Effect::CopyToClipboard { url } => clipboard.write(&url),
            Effect::Quit => quit = true,
        }
    }
    quit
}

#[cfg(test)]
mod tests {
    use super::{run_effects, ClipboardSink};
    use whip_core::Effect;
    use whip_engine::{EngineHandle, ExtractSettings, LookupSettings};

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn write(&mut self, text: &str) {
            self.writes.push(text.to_string());
        }
    }

    #[test]
    fn copy_effect_writes_the_clipboard_and_quit_ends_the_loop() {
        let engine = EngineHandle::new(LookupSettings::default(), ExtractSettings::default());
        let mut clipboard = RecordingClipboard::default();

        let quit = run_effects(
            vec![Effect::CopyToClipboard {
                url: "https://open.spotify.com/track/xyz".to_string(),
            }],
            &engine,
            &mut clipboard,
        );
        assert!(!quit);
        assert_eq!(clipboard.writes, vec!["https://open.spotify.com/track/xyz"]);

        let quit = run_effects(vec![Effect::Quit], &engine, &mut clipboard);
        assert!(quit);
        assert_eq!(clipboard.writes.len(), 1);
    }
}
