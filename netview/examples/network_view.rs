use netview::{
    infra::export::Dot,
    prelude::*,
};

fn main() {
    let mut network = MemoryNetwork::new();

    network.add_node("depot", Coord::new(0.0, 0.0));
    network.add_node("market", Coord::new(250.0, 40.0));
    network.add_node("harbor", Coord::new(400.0, -120.0));

    network.add_link("main-street", "depot", "market");
    network.add_link("main-street-back", "market", "depot");
    network.add_link("dock-road", "market", "harbor");

    let graph = GraphView::new("town", &network);

    println!(
        "{} nodes and {} edges in `{}`",
        graph.node_count(),
        graph.edge_count(),
        graph.id()
    );

    for node in graph.nodes() {
        println!(
            "{node}: in-degree {}, out-degree {}",
            node.in_degree(),
            node.out_degree()
        );

        for edge in node.leaving_edges() {
            println!("    {} -> {} via {}", edge.source(), edge.target(), edge.key());
        }
    }

    match graph.node_by_key("airport") {
        Ok(node) => println!("found {node}"),
        Err(error) => println!("lookup failed: {error}"),
    }

    print!("{}", Dot::default().to_string(&graph));
}
