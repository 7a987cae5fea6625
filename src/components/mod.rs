//! Reusable view pieces: the navigation shell, the interactive diagrams and
//! the decorative network canvas.

pub mod content;
pub mod icons;
pub mod metric_chart;
pub mod nav;
pub mod network_scene;
pub mod pipeline;
pub mod relationship_graph;
