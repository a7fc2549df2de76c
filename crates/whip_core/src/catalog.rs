/// One selectable streaming platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Identifier accepted on the command line.
    pub slug: &'static str,
    /// Key the lookup service uses in its response map and page markup.
    /// Differs from the slug where the service kept a legacy name
    /// (Apple Music is `itunes`, Amazon Music is `amazonMusic`).
    pub selector: &'static str,
    /// Name shown in the chooser.
    pub title: &'static str,
    /// Extra line shown when the entry is highlighted.
    pub help: Option<&'static str>,
}

impl Platform {
    /// True for the lookup service's own catalog entry, whose "link" is
    /// the canonical page itself.
    pub fn is_lookup_service(&self) -> bool {
        self.slug == CATALOG[0].slug
    }

    /// Looks a platform up by its command-line slug.
    pub fn by_slug(slug: &str) -> Option<Platform> {
        CATALOG.into_iter().find(|platform| platform.slug == slug)
    }
}

/// Fixed platform catalog, in display order. The lookup service's own
/// entry always comes first.
pub const CATALOG: [Platform; 11] = [
    Platform {
        slug: "songwhip",
        selector: "songwhip",
        title: "Songwhip",
        help: Some("Get a Songwhip URL with links to all available platforms."),
    },
    Platform {
        slug: "spotify",
        selector: "spotify",
        title: "Spotify",
        help: None,
    },
    Platform {
        slug: "apple",
        selector: "itunes",
        title: "Apple Music",
        help: None,
    },
    Platform {
        slug: "youtube",
        selector: "youtube",
        title: "YouTube Music",
        help: None,
    },
    Platform {
        slug: "tidal",
        selector: "tidal",
        title: "Tidal",
        help: None,
    },
    Platform {
        slug: "amazon",
        selector: "amazonMusic",
        title: "Amazon Music",
        help: None,
    },
    Platform {
        slug: "napster",
        selector: "napster",
        title: "Napster",
        help: None,
    },
    Platform {
        slug: "pandora",
        selector: "pandora",
        title: "Pandora",
        help: None,
    },
    Platform {
        slug: "deezer",
        selector: "deezer",
        title: "Deezer",
        help: None,
    },
    Platform {
        slug: "audiomack",
        selector: "audiomack",
        title: "AudioMack",
        help: None,
    },
    Platform {
        slug: "qobuz",
        selector: "qobuz",
        title: "Qobuz",
        help: None,
    },
];
