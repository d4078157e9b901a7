//! Shared UI primitive library for the CloudDrive dashboard.
//!
//! The crate owns reusable Leptos primitives, a glyph-based icon API, and the stable
//! `data-ui-*` DOM contract the dashboard stylesheet targets. Dashboard components compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CheckboxField, Cluster, ConfirmButton,
    EmptyState, Grid, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, NavItem,
    NavList, Notice, ProgressBar, SelectField, Stack, Statistic, SurfaceVariant, Tab, TabList,
    Text, TextField, TextRole, TextTone, ToolBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, CheckboxField, Cluster, ConfirmButton,
        EmptyState, Grid, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, NavItem, NavList, Notice, ProgressBar, SelectField, Stack, Statistic,
        SurfaceVariant, Tab, TabList, Text, TextField, TextRole, TextTone, ToolBar,
    };
}
