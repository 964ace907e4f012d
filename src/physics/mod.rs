pub mod rapier_setup;
