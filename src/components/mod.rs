mod avatar;
mod button;
mod drawer;
mod fab;
mod memory_card;
mod message_bubble;
mod theme_toggle;
mod timeline_header;

pub use avatar::{ initials, AvatarGroup, AvatarSize, FamilyAvatar };
pub use button::{ ButtonGroup, ButtonSize, ButtonVariant, Direction, FamDingButton, IconPosition };
pub use drawer::MobileDrawer;
pub use fab::{ FabSize, FloatingActionButton, SpeedDial, SpeedDialAction };
pub use memory_card::MemoryCard;
pub use message_bubble::MessageBubble;
pub use theme_toggle::{ ThemeToggle, ToggleSize };
pub use timeline_header::{ DateSeparator, TimelineHeader };
