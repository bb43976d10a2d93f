//! Restaurant record and related types.

mod draft;
mod record;
mod value_objects;
mod view;

pub use draft::{NewRestaurant, RestaurantUpdate};
pub use record::Restaurant;
pub use value_objects::{Address, GradeEntry};
pub use view::RestaurantView;
