mod file_picker;
mod story_feed;
mod story_modal;

pub use file_picker::FilePicker;
pub use story_feed::StoryFeed;
pub use story_modal::StoryModal;
