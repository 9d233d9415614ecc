mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{
    assert_angle_wrapped, assert_state_close, assert_state_valid, assert_unit_quaternion,
};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
