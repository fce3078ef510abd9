use serde_json::json;
use trellis::graph::{ConnectedLink, Diagram, Endpoint, Graph, Link, Node};
use trellis::{
    ConversionStrategy, DefaultStrategy, RequestEdge, RequestGraph, RequestNode, ResultEdge,
    ResultNode, export_graph,
};

fn two_nodes_one_link() -> Graph {
    let mut g = Graph::new();
    g.add_cell(Node::new("a", 50.0, 30.0)).unwrap();
    g.add_cell(Node::new("b", 50.0, 30.0)).unwrap();
    g.add_cell(Link::between("l", "a", "b")).unwrap();
    g
}

#[test]
fn export_matches_wire_format() {
    let g = two_nodes_one_link();
    let graph = RequestGraph::from_diagram(&g, &DefaultStrategy::default());
    assert_eq!(
        serde_json::to_value(&graph).unwrap(),
        json!({
            "id": "root",
            "children": [
                {"id": "a", "width": 50.0, "height": 30.0, "children": []},
                {"id": "b", "width": 50.0, "height": 30.0, "children": []}
            ],
            "edges": [
                {"id": "l", "source": "a", "target": "b"}
            ]
        })
    );
}

#[test]
fn export_skips_links_with_free_endpoints() {
    let mut g = two_nodes_one_link();
    g.add_cell(Link::new(
        "to-point",
        Endpoint::cell("a"),
        Endpoint::point(300.0, 10.0),
    ))
    .unwrap();
    g.add_cell(Link::new(
        "from-point",
        Endpoint::point(0.0, 0.0),
        Endpoint::cell("b"),
    ))
    .unwrap();
    g.add_cell(Link::new("empty-id", Endpoint::cell("a"), Endpoint::cell("")))
        .unwrap();
    g.add_cell(Link::new("unset", Endpoint::unset(), Endpoint::cell("b")))
        .unwrap();
    g.add_cell(Link::new(
        "floating",
        Endpoint::point(0.0, 0.0),
        Endpoint::point(1.0, 1.0),
    ))
    .unwrap();

    let mut graph = RequestGraph::new();
    let stats = export_graph(&g, &mut graph, &DefaultStrategy::default());

    let edge_ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["l"]);
    assert_eq!(stats.edges, 1);
    assert_eq!(stats.skipped_links, 5);
    assert_eq!(stats.nodes, 2);
}

#[test]
fn export_includes_every_node_once_in_diagram_order() {
    let mut g = Graph::new();
    for (i, id) in ["n3", "n1", "n2"].iter().enumerate() {
        g.add_cell(Node::new(*id, 10.0 * (i as f64 + 1.0), 5.0))
            .unwrap();
    }
    g.add_cell(Link::between("e1", "n3", "n1")).unwrap();
    g.add_cell(Link::between("e2", "n1", "n2")).unwrap();
    g.add_cell(Node::new("n4", 1.0, 1.0)).unwrap();

    let graph = RequestGraph::from_diagram(&g, &DefaultStrategy::default());
    let node_ids: Vec<&str> = graph.children.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids, vec!["n3", "n1", "n2", "n4"]);
    assert_eq!(graph.children[2].width, 30.0);
    assert!(graph.children.iter().all(|n| n.children.is_empty()));
    assert_eq!(
        graph.edges,
        vec![
            RequestEdge {
                id: "e1".into(),
                source: "n3".into(),
                target: "n1".into(),
            },
            RequestEdge {
                id: "e2".into(),
                source: "n1".into(),
                target: "n2".into(),
            },
        ]
    );
}

#[test]
fn export_does_not_check_that_link_endpoints_exist() {
    let mut g = Graph::new();
    g.add_cell(Link::between("l", "ghost-a", "ghost-b")).unwrap();
    let graph = RequestGraph::from_diagram(&g, &DefaultStrategy::default());
    assert!(graph.children.is_empty());
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn export_appends_to_existing_graph() {
    let g = two_nodes_one_link();
    let strategy = DefaultStrategy::default();
    let mut graph = RequestGraph::from_diagram(&g, &strategy);
    export_graph(&g, &mut graph, &strategy);
    assert_eq!(graph.children.len(), 4);
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.id, "root");
}

struct PrefixedIds;

impl ConversionStrategy for PrefixedIds {
    fn create_node(&self, node: &Node) -> RequestNode {
        RequestNode {
            id: format!("n:{}", node.id),
            width: node.size.width * 2.0,
            height: node.size.height * 2.0,
            children: Vec::new(),
        }
    }

    fn create_edge(&self, link: ConnectedLink<'_>) -> RequestEdge {
        RequestEdge {
            id: format!("e:{}", link.id()),
            source: format!("n:{}", link.source),
            target: format!("n:{}", link.target),
        }
    }

    fn import_node(&self, _diagram: &mut dyn Diagram, _node: &ResultNode) -> bool {
        false
    }

    fn import_edge(&self, _diagram: &mut dyn Diagram, _edge: &ResultEdge) -> bool {
        false
    }

    fn set_link_vertices(&self) -> bool {
        false
    }
}

#[test]
fn export_delegates_field_mapping_to_strategy() {
    let g = two_nodes_one_link();
    let graph = RequestGraph::from_diagram(&g, &PrefixedIds);
    assert_eq!(graph.children[0].id, "n:a");
    assert_eq!(graph.children[0].width, 100.0);
    assert_eq!(graph.edges[0].source, "n:a");
    assert_eq!(graph.edges[0].id, "e:l");
}
