//! Centralized icon registry for the form toolkit.
//!
//! Widgets never embed raw SVG. They name an [`IconName`] and the single
//! [`Icon`] renderer draws it from the stroke-path catalog below (24px grid,
//! 2px round strokes). Hosts that only have a string token, such as the
//! showcase's icon gallery, go through [`IconByToken`], which renders a `?`
//! placeholder for tokens the registry does not know.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::tokens::merge_layout_class;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Up chevron.
    ChevronUp,
    /// Down chevron (dropdown affordance).
    ChevronDown,
    /// Download tray.
    Download,
    /// Upload tray.
    Upload,
    /// Duplicate / copy.
    Copy,
    /// Trash can.
    Delete,
    /// Pencil.
    Edit,
    /// Bookmark / save.
    Save,
    /// Magnifying glass.
    Search,
    /// Funnel.
    Filter,
    /// Sort bars.
    Sort,
    /// Circular arrows.
    Refresh,
    /// Cross mark.
    Close,
    /// Hamburger.
    Menu,
    /// Horizontal ellipsis.
    More,
    /// Cog.
    Settings,
    /// Circled `i`.
    Info,
    /// Triangle with exclamation mark.
    Warning,
    /// Circled cross.
    Error,
    /// Circled check.
    Success,
    /// Circled question mark.
    Help,
    /// Circled question mark (alias of help).
    Question,
    /// Open eye.
    Eye,
    /// Crossed-out eye.
    EyeOff,
    /// Blank document.
    File,
    /// Folder.
    Folder,
    /// Photo.
    Image,
    /// Document with text lines.
    Document,
    /// Document with text lines (file list alias).
    FileText,
    /// Video camera.
    Video,
    /// Speaker.
    Audio,
    /// Music note.
    Music,
    /// Chain link.
    Link,
    /// Single person.
    User,
    /// Group of people.
    Users,
    /// Person in a circle.
    Profile,
    /// Heart.
    Heart,
    /// Star.
    Star,
    /// Share graph.
    Share,
    /// Envelope.
    Mail,
    /// Handset.
    Phone,
    /// Chat bubble.
    Message,
    /// Bell with badge.
    Notification,
    /// Bell.
    Bell,
    /// Check mark.
    Check,
    /// Plus sign.
    Plus,
    /// Minus sign.
    Minus,
    /// Spinner arc; pair with `spin`.
    Loading,
    /// Closed padlock.
    Lock,
    /// Open padlock.
    Unlock,
    /// Four squares.
    Grid,
    /// Bulleted list.
    List,
    /// Calendar page.
    Calendar,
    /// Clock face.
    Clock,
    /// Angle brackets.
    Code,
    /// Prompt.
    Terminal,
    /// Bug.
    Bug,
    /// Database cylinder.
    Database,
    /// Dollar sign.
    Dollar,
    /// Text size glyph.
    Scale,
}

impl IconName {
    /// Every registered icon, in gallery order.
    pub const ALL: [Self; 66] = [
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::ChevronUp,
        Self::ChevronDown,
        Self::Download,
        Self::Upload,
        Self::Copy,
        Self::Delete,
        Self::Edit,
        Self::Save,
        Self::Search,
        Self::Filter,
        Self::Sort,
        Self::Refresh,
        Self::Close,
        Self::Menu,
        Self::More,
        Self::Settings,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Success,
        Self::Help,
        Self::Question,
        Self::Eye,
        Self::EyeOff,
        Self::File,
        Self::Folder,
        Self::Image,
        Self::Document,
        Self::FileText,
        Self::Video,
        Self::Audio,
        Self::Music,
        Self::Link,
        Self::User,
        Self::Users,
        Self::Profile,
        Self::Heart,
        Self::Star,
        Self::Share,
        Self::Mail,
        Self::Phone,
        Self::Message,
        Self::Notification,
        Self::Bell,
        Self::Check,
        Self::Plus,
        Self::Minus,
        Self::Loading,
        Self::Lock,
        Self::Unlock,
        Self::Grid,
        Self::List,
        Self::Calendar,
        Self::Clock,
        Self::Code,
        Self::Terminal,
        Self::Bug,
        Self::Database,
        Self::Dollar,
        Self::Scale,
    ];

    /// Stable token used for CSS hooks and string lookups.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronUp => "chevron-up",
            Self::ChevronDown => "chevron-down",
            Self::Download => "download",
            Self::Upload => "upload",
            Self::Copy => "copy",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::Save => "save",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Sort => "sort",
            Self::Refresh => "refresh",
            Self::Close => "close",
            Self::Menu => "menu",
            Self::More => "more",
            Self::Settings => "settings",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
            Self::Help => "help",
            Self::Question => "question",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Image => "image",
            Self::Document => "document",
            Self::FileText => "file-text",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Music => "music",
            Self::Link => "link",
            Self::User => "user",
            Self::Users => "users",
            Self::Profile => "profile",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Share => "share",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Notification => "notification",
            Self::Bell => "bell",
            Self::Check => "check",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Loading => "loading",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Calendar => "calendar",
            Self::Clock => "clock",
            Self::Code => "code",
            Self::Terminal => "terminal",
            Self::Bug => "bug",
            Self::Database => "database",
            Self::Dollar => "dollar",
            Self::Scale => "scale",
        }
    }

    /// Looks an icon up by its token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Raw SVG body markup (stroke paths on a 24px grid).
    fn svg_body(self) -> &'static str {
        match self {
            Self::ArrowLeft => r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
            Self::ArrowDown => r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#,
            Self::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::ChevronUp => r#"<path d="m18 15-6-6-6 6"/>"#,
            Self::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"#
            }
            Self::Upload => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m17 8-5-5-5 5"/><path d="M12 3v12"/>"#
            }
            Self::Copy => {
                r#"<rect width="14" height="14" x="8" y="8" rx="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#
            }
            Self::Delete => {
                r#"<path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/>"#
            }
            Self::Edit => r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#,
            Self::Save => r#"<path d="m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"/>"#,
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Filter => r#"<path d="M22 3H2l8 9.46V19l4 2v-8.54L22 3z"/>"#,
            Self::Sort => r#"<path d="M3 6h18"/><path d="M3 12h12"/><path d="M3 18h6"/>"#,
            Self::Refresh => {
                r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#
            }
            Self::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::Menu => r#"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"#,
            Self::More => {
                r#"<circle cx="5" cy="12" r="1"/><circle cx="12" cy="12" r="1"/><circle cx="19" cy="12" r="1"/>"#
            }
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.6 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#
            }
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::Warning => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            Self::Error => {
                r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#
            }
            Self::Success => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Self::Help | Self::Question => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#
            }
            Self::Eye => {
                r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::EyeOff => {
                r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><path d="m2 2 20 20"/>"#
            }
            Self::File => {
                r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><path d="M14 2v6h6"/>"#
            }
            Self::Folder => {
                r#"<path d="M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z"/>"#
            }
            Self::Image => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>"#
            }
            Self::Document | Self::FileText => {
                r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><path d="M14 2v6h6"/><path d="M16 13H8"/><path d="M16 17H8"/><path d="M10 9H8"/>"#
            }
            Self::Video => {
                r#"<path d="m22 8-6 4 6 4V8Z"/><rect width="14" height="12" x="2" y="6" rx="2"/>"#
            }
            Self::Audio => {
                r#"<path d="M11 5 6 9H2v6h4l5 4V5Z"/><path d="M15.54 8.46a5 5 0 0 1 0 7.07"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14"/>"#
            }
            Self::Music => {
                r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#
            }
            Self::Link => {
                r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#
            }
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Self::Profile => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="10" r="3"/><path d="M7 20.66V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.66"/>"#
            }
            Self::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Self::Star => {
                r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>"#
            }
            Self::Share => {
                r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><path d="m8.59 13.51 6.83 3.98"/><path d="m15.41 6.51-6.82 3.98"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Self::Message => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            Self::Notification => {
                r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/><circle cx="18" cy="5" r="3"/>"#
            }
            Self::Bell => {
                r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>"#
            }
            Self::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Self::Plus => r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#,
            Self::Minus => r#"<path d="M5 12h14"/>"#,
            Self::Loading => r#"<path d="M21 12a9 9 0 1 1-6.22-8.56"/>"#,
            Self::Lock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            Self::Unlock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2"/><path d="M7 11V7a5 5 0 0 1 9.9-1"/>"#
            }
            Self::Grid => {
                r#"<rect width="7" height="7" x="3" y="3" rx="1"/><rect width="7" height="7" x="14" y="3" rx="1"/><rect width="7" height="7" x="14" y="14" rx="1"/><rect width="7" height="7" x="3" y="14" rx="1"/>"#
            }
            Self::List => {
                r#"<path d="M8 6h13"/><path d="M8 12h13"/><path d="M8 18h13"/><path d="M3 6h.01"/><path d="M3 12h.01"/><path d="M3 18h.01"/>"#
            }
            Self::Calendar => {
                r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#
            }
            Self::Clock => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
            Self::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            Self::Terminal => r#"<path d="m4 17 6-6-6-6"/><path d="M12 19h8"/>"#,
            Self::Bug => {
                r#"<rect width="8" height="14" x="8" y="6" rx="4"/><path d="m19 7-3 2"/><path d="m5 7 3 2"/><path d="m19 19-3-2"/><path d="m5 19 3-2"/><path d="M20 13h-4"/><path d="M4 13h4"/><path d="m10 4 1 2"/><path d="m14 4-1 2"/>"#
            }
            Self::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#
            }
            Self::Dollar => {
                r#"<path d="M12 2v20"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#
            }
            Self::Scale => r#"<path d="M4 7V4h16v3"/><path d="M9 20h6"/><path d="M12 4v16"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Default,
    /// 24px.
    Md,
    /// 32px.
    Lg,
    /// 40px.
    Xl,
    /// 48px.
    #[serde(rename = "2xl")]
    Xxl,
}

impl IconSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Xs,
        Self::Sm,
        Self::Default,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Default => 20,
            Self::Md => 24,
            Self::Lg => 32,
            Self::Xl => 40,
            Self::Xxl => 48,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Icon color tones.
pub enum IconTone {
    /// Body text color.
    #[default]
    Default,
    /// Brand color.
    Primary,
    /// Secondary foreground.
    Secondary,
    /// Positive.
    Success,
    /// Caution.
    Warning,
    /// Destructive.
    Error,
    /// De-emphasized.
    Muted,
    /// White.
    White,
    /// Black.
    Black,
}

impl IconTone {
    /// Every tone.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Muted,
        Self::White,
        Self::Black,
    ];

    /// Stable tone token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Muted => "muted",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

#[component]
/// Renders an icon from the registry.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(optional)]
    size: IconSize,
    /// Color tone.
    #[prop(optional)]
    tone: IconTone,
    /// Continuously rotate (loading indicators).
    #[prop(optional)]
    spin: bool,
    /// Layout-only class hook.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class=merge_layout_class("ui-icon", layout_class)
            data-icon=icon.token()
            data-size=size.token()
            data-tone=tone.token()
            data-spin=spin.then_some("true")
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            role="img"
            aria-label=format!("{} icon", icon.token())
            inner_html=icon.svg_body()
        />
    }
}

#[component]
/// Renders an icon named by a string token, or a `?` placeholder when the
/// registry has no such icon.
pub fn IconByToken(
    /// Registry token, e.g. `"search"`.
    #[prop(into)]
    token: String,
    /// Standardized icon size token.
    #[prop(optional)]
    size: IconSize,
    /// Color tone.
    #[prop(optional)]
    tone: IconTone,
) -> impl IntoView {
    match IconName::from_token(&token) {
        Some(icon) => view! { <Icon icon size tone /> }.into_view(),
        None => {
            logging::warn!("icon token `{token}` is not in the registry");
            view! {
                <span
                    class="ui-icon"
                    data-icon="unknown"
                    data-size=size.token()
                    data-tone=tone.token()
                >
                    "?"
                </span>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_are_unique_and_resolve_back() {
        let tokens: HashSet<_> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
            assert!(icon.svg_body().starts_with('<'), "{}", icon.token());
        }
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        assert_eq!(IconName::from_token("sparkles"), None);
        assert_eq!(IconName::from_token("Search"), None);
    }

    #[test]
    fn sizes_grow_monotonically() {
        let px: Vec<u16> = IconSize::ALL.iter().map(|size| size.px()).collect();
        let mut sorted = px.clone();
        sorted.sort_unstable();
        assert_eq!(px, sorted);
        assert_eq!(IconSize::default().token(), "default");
        assert_eq!(IconTone::ALL.len(), 9);
    }
}
