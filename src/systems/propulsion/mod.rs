mod powerplant;

pub use powerplant::{
    calculate_thrust_and_fuel_flow, update_powerplant_state, PowerplantState, PropulsionModel,
};
