//! Stock movements between the catalog and user carts.

pub mod reservation;

pub use reservation::ReservationEngine;
