#![no_main]

use libfuzzer_sys::fuzz_target;

use netview::{infra::testing::check_consistency, storage::MemoryNetwork, view::GraphView};

fuzz_target!(|network: MemoryNetwork| {
    let graph = GraphView::new("fuzz", &network);

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
