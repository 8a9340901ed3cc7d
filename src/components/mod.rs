//! The component library.
//!
//! Form controls (button, input, select, textarea, checkbox/radio, toggle),
//! interface elements (alert, avatar, badge, card, empty state, icon),
//! navigation (tabs) and notifications (toast).

mod alert;
mod avatar;
mod badge;
mod button;
mod card;
mod checkbox_radio;
mod empty_state;
mod icon;
mod input;
mod select;
mod tabs;
mod textarea;
mod toast;
mod toggle;

pub use alert::Alert;
pub use avatar::{initials, Avatar, AvatarShape, AvatarSize, Status};
pub use badge::Badge;
pub use button::{Button, ButtonType};
pub use card::{Card, CardVariant, ImagePosition, Spacing};
pub use checkbox_radio::{CheckboxRadio, Choice, ChoiceType, Orientation};
pub use empty_state::{ActionSlot, EmptyState, EmptyStateVariant};
pub use icon::{Icon, IconSize};
pub use input::{Input, InputType};
pub use select::{normalize_value, Select, SelectOption};
pub use tabs::{Tab, Tabs};
pub use textarea::{CountMode, Textarea};
pub use toast::{Toast, ToastPosition};
pub use toggle::Toggle;
