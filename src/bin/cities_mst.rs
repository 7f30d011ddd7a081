//! Demo: minimum spanning forest over a map of US cities.
//!
//! Prints the accepted edges as `<u> -- <v> == <weight>`. Anchorage has
//! no roads, so the result is a two-component forest. Set `RUST_LOG` to
//! see the summary line.

use spanr::{minimum_spanning_tree, Edge, GraphResult};

fn main() -> GraphResult<()> {
    env_logger::init();

    let cities = [
        "New York City",
        "Washington, DC",
        "Atlanta",
        "Miami",
        "Chicago",
        "Minneapolis",
        "Dallas",
        "New Orleans",
        "Denver",
        "Albuquerque",
        "Boise",
        "San Francisco",
        "Los Angeles",
        "Seattle",
        "Anchorage",
    ];

    // (city, city, distance in miles)
    let roads = [
        Edge::new("New York City", "Washington, DC", 230u32),
        Edge::new("New York City", "Chicago", 790),
        Edge::new("Washington, DC", "Atlanta", 640),
        Edge::new("Atlanta", "Miami", 660),
        Edge::new("Atlanta", "Dallas", 780),
        Edge::new("Chicago", "Minneapolis", 410),
        Edge::new("Chicago", "Dallas", 920),
        Edge::new("Minneapolis", "Denver", 910),
        Edge::new("Dallas", "Albuquerque", 650),
        Edge::new("Dallas", "New Orleans", 510),
        Edge::new("Denver", "Albuquerque", 450),
        Edge::new("Denver", "Boise", 820),
        Edge::new("Albuquerque", "Los Angeles", 790),
        Edge::new("Boise", "San Francisco", 500),
        Edge::new("Boise", "Seattle", 500),
        Edge::new("Los Angeles", "San Francisco", 380),
        Edge::new("Los Angeles", "Seattle", 960),
    ];

    let mst = minimum_spanning_tree(cities, &roads)?;

    log::info!(
        "accepted {} of {} edges, total distance {} miles",
        mst.len(),
        roads.len(),
        mst.total_weight()
    );

    println!("Minimum spanning tree using Kruskal's algorithm:");
    for edge in &mst.edges {
        println!("{} -- {} == {}", edge.u, edge.v, edge.weight);
    }

    Ok(())
}
