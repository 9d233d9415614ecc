mod inertia;

pub use inertia::InertiaModel;
