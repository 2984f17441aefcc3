pub mod flow_timer;
pub mod topology_canvas;
