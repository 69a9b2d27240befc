//! Graph synthesis: turn extracted entities into a DOT document.
//!
//! The document has a fixed shape: graph header, one cluster per entity
//! kind (objects, enums, unions, aliases) holding that kind's nodes in
//! extraction order, then the flat edge list.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT builder and escaping helpers
//! - [`label`]: HTML-like table labels per entity variant
//! - [`edge`]: inheritance, aggregation and union-membership edges
//! - [`options`]: layout, palette and primitive allow-list

pub mod dot;
pub mod edge;
pub mod label;
pub mod options;

use tracing::debug;

use typegraph_core::{Entity, EntityKind};

pub use dot::{DotBuilder, Endpoint, escape_html, escape_port, port_name, quote_id};
pub use edge::{Edge, EdgeKind, collect_edges};
pub use options::{Layout, Palette, RenderOptions};

/// Render entities with default options.
pub fn render_graph(entities: &[Entity]) -> String {
    render_graph_with_options(entities, &RenderOptions::default())
}

/// Render entities to a DOT document.
pub fn render_graph_with_options(entities: &[Entity], options: &RenderOptions) -> String {
    let palette = &options.palette;
    let mut dot = DotBuilder::new("G");

    let mut graph_attrs = vec![
        ("overlap", "false"),
        ("splines", "true"),
        ("bgcolor", "transparent"),
    ];
    if options.layout == Layout::LeftToRight {
        graph_attrs.push(("rankdir", "LR"));
    }
    dot.defaults("graph", &graph_attrs)
        .defaults("node", &[("shape", "plain"), ("fontname", "Helvetica")])
        .defaults(
            "edge",
            &[("fontname", "Helvetica"), ("dir", "back"), ("arrowtail", "empty")],
        )
        .blank();

    for kind in EntityKind::ALL {
        let (id, fill) = cluster_style(kind, palette);
        dot.start_cluster(id)
            .attr("style", "rounded,filled")
            .attr("color", fill)
            .attr("fillcolor", fill);
        for entity in entities.iter().filter(|e| e.kind() == kind) {
            dot.html_node(entity.name(), &label::entity_label(entity, palette));
        }
        dot.end_cluster();
    }
    dot.blank();

    let edges = collect_edges(entities, &options.primitives);
    edge::write_edges(&mut dot, &edges, palette);

    debug!(
        nodes = entities.len(),
        edges = edges.len(),
        "synthesized graph"
    );
    dot.build()
}

fn cluster_style(kind: EntityKind, palette: &Palette) -> (&'static str, &'static str) {
    match kind {
        EntityKind::Object => ("objects", palette.object_fill),
        EntityKind::Enum => ("enums", palette.enum_fill),
        EntityKind::Union => ("unions", palette.union_fill),
        EntityKind::Alias => ("aliases", palette.alias_fill),
    }
}
