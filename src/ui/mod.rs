pub mod button;
pub mod infobox;
pub mod text;
pub mod zoom;

pub use button::{Activation, Button, ButtonKind, ButtonVisuals, SpriteKind};
pub use infobox::{DialogContent, Fired, InfoBox, TextItem};
pub use text::{Label, TextStyle};
pub use zoom::ZoomAnimation;
