//! Inline SVG icon set.
//!
//! The UI uses a closed set of glyphs, so they are registered here as an enum
//! instead of pulling in an icon font. All paths are drawn on a 24x24 grid
//! and rendered as strokes.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Bars,
    Magic,
    Sync,
    Expand,
    Compress,
    Save,
    Times,
    Plus,
    Trash,
    CheckCircle,
    ExclamationCircle,
    InfoCircle,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Magic => "magic",
            Self::Sync => "sync",
            Self::Expand => "expand",
            Self::Compress => "compress",
            Self::Save => "save",
            Self::Times => "times",
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::CheckCircle => "check-circle",
            Self::ExclamationCircle => "exclamation-circle",
            Self::InfoCircle => "info-circle",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Bars => "M3 6h18M3 12h18M3 18h18",
            Self::Magic => "M4 20L16 8M14 4l1-2 1 2 2 1-2 1-1 2-1-2-2-1zM19 11l.5-1 .5 1 1 .5-1 .5-.5 1-.5-1-1-.5z",
            Self::Sync => "M20 11A8 8 0 0 0 6 6L4 8M4 4v4h4M4 13a8 8 0 0 0 14 5l2-2M20 20v-4h-4",
            Self::Expand => "M4 9V4h5M20 9V4h-5M4 15v5h5M20 15v5h-5",
            Self::Compress => "M9 4v5H4M15 4v5h5M9 20v-5H4M15 20v-5h5",
            Self::Save => "M5 3h11l3 3v15H5zM8 3v5h7V3M8 21v-7h8v7",
            Self::Times => "M6 6l12 12M18 6L6 18",
            Self::Plus => "M12 5v14M5 12h14",
            Self::Trash => "M4 7h16M10 11v6M14 11v6M6 7l1 13h10l1-13M9 7V4h6v3",
            Self::CheckCircle => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18zM8 12l3 3 5-6",
            Self::ExclamationCircle => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18zM12 7v6M12 16v1",
            Self::InfoCircle => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18zM12 11v6M12 7v1",
        }
    }
}

/// Render one icon. Decorative by default; pair it with a labelled control.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { format!("icon icon--{}", icon.name()) } else { format!("icon icon--{} {class}", icon.name()) };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Icon; 12] = [
        Icon::Bars,
        Icon::Magic,
        Icon::Sync,
        Icon::Expand,
        Icon::Compress,
        Icon::Save,
        Icon::Times,
        Icon::Plus,
        Icon::Trash,
        Icon::CheckCircle,
        Icon::ExclamationCircle,
        Icon::InfoCircle,
    ];

    #[test]
    fn every_icon_has_a_path() {
        for icon in ALL {
            assert!(icon.path().starts_with('M'), "{} path must start with a move", icon.name());
        }
    }

    #[test]
    fn icon_names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), ALL.len());
    }
}
