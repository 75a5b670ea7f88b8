pub mod models;
pub mod utils;

// Models and helpers shared by the engine and the GUI.
// Nothing here owns state or touches the runtime.
