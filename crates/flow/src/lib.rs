//! Data model for the Filament flow graph.
//!
//! Widget contracts reference nodes and flows through the carriers defined
//! here. The crate holds no layout or rendering state; it is the shared
//! vocabulary between the graph owner and the widget layer.

pub mod flow;
pub mod id;
pub mod node;
pub mod port;

pub use flow::FlowData;
pub use id::{FlowId, NodeId};
pub use node::NodeData;
pub use port::PortType;
