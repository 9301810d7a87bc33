// Homepage routes

mod home;

pub use home::HomePage;
