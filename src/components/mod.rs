// ABOUTME: UI components for rendering the dreamer TUI views and overlays

pub mod builder;
pub mod help;
pub mod landing;
pub mod layout;
pub mod save_dialog;
pub mod storyboard;
pub mod suggestion_popup;
pub mod visual_editor;

pub use builder::BuilderComponent;
pub use help::HelpComponent;
pub use landing::LandingComponent;
pub use layout::LayoutComponent;
pub use save_dialog::SaveDialogComponent;
pub use storyboard::StoryboardComponent;
pub use suggestion_popup::SuggestionPopupComponent;
pub use visual_editor::VisualEditorComponent;
