//! Glyph icons rendered as text so the dashboard ships without an icon font.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons used across the dashboard.
pub enum IconName {
    /// Generic file.
    File,
    /// Image file.
    Image,
    /// Document file.
    Document,
    /// Video file.
    Video,
    /// Audio file.
    Audio,
    /// Archive file.
    Archive,
    /// Favorite (outlined).
    Star,
    /// Favorite (filled).
    StarFilled,
    /// Trash.
    Trash,
    /// Restore from trash.
    Restore,
    /// Download.
    Download,
    /// Upload.
    Upload,
    /// Grid view.
    Grid,
    /// List view.
    List,
    /// Search.
    Search,
    /// User profile.
    User,
    /// Sign out.
    Logout,
    /// Statistics.
    Chart,
    /// Storage/cloud.
    Cloud,
    /// Dismiss.
    Close,
    /// Success.
    Check,
    /// Warning.
    Warning,
    /// Information.
    Info,
}

impl IconName {
    /// Text glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::File => "\u{1F4C4}",
            Self::Image => "\u{1F5BC}",
            Self::Document => "\u{1F4DD}",
            Self::Video => "\u{1F3AC}",
            Self::Audio => "\u{1F3B5}",
            Self::Archive => "\u{1F5DC}",
            Self::Star => "\u{2606}",
            Self::StarFilled => "\u{2605}",
            Self::Trash => "\u{1F5D1}",
            Self::Restore => "\u{21BA}",
            Self::Download => "\u{2B07}",
            Self::Upload => "\u{2B06}",
            Self::Grid => "\u{25A6}",
            Self::List => "\u{2630}",
            Self::Search => "\u{1F50D}",
            Self::User => "\u{1F464}",
            Self::Logout => "\u{23FB}",
            Self::Chart => "\u{1F4CA}",
            Self::Cloud => "\u{2601}",
            Self::Close => "\u{2715}",
            Self::Check => "\u{2714}",
            Self::Warning => "\u{26A0}",
            Self::Info => "\u{2139}",
        }
    }

    /// Stable token used in DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Archive => "archive",
            Self::Star => "star",
            Self::StarFilled => "star-filled",
            Self::Trash => "trash",
            Self::Restore => "restore",
            Self::Download => "download",
            Self::Upload => "upload",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Search => "search",
            Self::User => "user",
            Self::Logout => "logout",
            Self::Chart => "chart",
            Self::Cloud => "cloud",
            Self::Close => "close",
            Self::Check => "check",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default.
    #[default]
    Md,
    /// File-card preview size.
    Lg,
    /// Empty-state hero size.
    Xl,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
