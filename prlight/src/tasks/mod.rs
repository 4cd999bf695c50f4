// Task-Modul: Run-Loop und Shutdown
//
// Die Run-Loop ist die einzige Stelle, die pollt und den Strand antreibt.
// Der Signal-Handler kommuniziert nur über das StopToken mit ihr.

pub mod shutdown;
pub mod status_loop;

// Re-export für einfachen Import
pub use shutdown::install_signal_handler;
pub use status_loop::status_loop;
