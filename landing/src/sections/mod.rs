// Landing page sections

mod features;
mod footer;
mod hero;
mod nav;
mod trust;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use trust::TrustBar;
