//! Structural validation of a workflow graph

use crate::domain::graph::{Edge, GraphModel, NodeLabel};

use super::error::ValidationError;

/// Status message shown when a graph passes validation
pub const VALID_WORKFLOW_MESSAGE: &str = "Workflow is valid!";

/// Labels every runnable workflow must contain, in the order they are checked
const REQUIRED_ROLES: [NodeLabel; 3] = [
    NodeLabel::UserQuery,
    NodeLabel::LlmEngine,
    NodeLabel::Output,
];

/// Decide whether the graph is a runnable pipeline.
///
/// Checks run in a fixed order and the first failure is reported:
/// empty graph, missing roles (User Query, LLM Engine, Output), then intake
/// connectivity and finally output connectivity. Edges pointing at unknown
/// ids never match.
pub fn validate(graph: &GraphModel) -> Result<(), ValidationError> {
    if graph.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }

    if let Some(missing) = REQUIRED_ROLES.into_iter().find(|role| !graph.has_label(*role)) {
        return Err(ValidationError::MissingRole(missing));
    }

    let has_intake = any_edge(graph, |source, target| {
        source == NodeLabel::UserQuery
            && matches!(target, NodeLabel::LlmEngine | NodeLabel::KnowledgeBase)
    });

    if !has_intake {
        return Err(ValidationError::DisconnectedIntake);
    }

    let has_output = any_edge(graph, |source, target| {
        source == NodeLabel::LlmEngine && target == NodeLabel::Output
    });

    if !has_output {
        return Err(ValidationError::DisconnectedOutput);
    }

    Ok(())
}

fn any_edge(graph: &GraphModel, matches: impl Fn(NodeLabel, NodeLabel) -> bool) -> bool {
    graph
        .edges()
        .iter()
        .filter_map(|edge| resolve(graph, edge))
        .any(|(source, target)| matches(source, target))
}

fn resolve(graph: &GraphModel, edge: &Edge) -> Option<(NodeLabel, NodeLabel)> {
    Some((graph.label_of(&edge.source)?, graph.label_of(&edge.target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::{Node, Position};

    fn add(graph: &mut GraphModel, label: NodeLabel) -> Node {
        graph.add_node(label, Position::default())
    }

    fn connect(graph: &mut GraphModel, source: &Node, target: &Node) {
        graph.add_edge(source.id().clone(), target.id().clone());
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphModel::new();
        assert_eq!(validate(&graph), Err(ValidationError::EmptyGraph));
    }

    #[test]
    fn test_empty_graph_wins_over_stray_edges() {
        let mut graph = GraphModel::new();
        graph.add_edge("node_0", "node_1");
        assert_eq!(validate(&graph), Err(ValidationError::EmptyGraph));
    }

    #[test]
    fn test_missing_user_query() {
        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::LlmEngine);
        add(&mut graph, NodeLabel::Output);

        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::UserQuery))
        );
    }

    #[test]
    fn test_missing_roles_reported_in_priority_order() {
        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::LlmEngine);
        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::UserQuery))
        );

        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::KnowledgeBase);
        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::UserQuery))
        );

        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::UserQuery);
        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::LlmEngine))
        );

        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::UserQuery);
        add(&mut graph, NodeLabel::LlmEngine);
        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::Output))
        );
    }

    #[test]
    fn test_missing_roles_checked_before_connectivity() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        connect(&mut graph, &query, &llm);

        assert_eq!(
            validate(&graph),
            Err(ValidationError::MissingRole(NodeLabel::Output))
        );
    }

    #[test]
    fn test_disconnected_intake() {
        let mut graph = GraphModel::new();
        let _query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &llm, &output);

        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedIntake));
    }

    #[test]
    fn test_intake_into_output_does_not_count() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &query, &output);
        connect(&mut graph, &llm, &output);

        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedIntake));
    }

    #[test]
    fn test_intake_checked_before_output() {
        let mut graph = GraphModel::new();
        add(&mut graph, NodeLabel::UserQuery);
        add(&mut graph, NodeLabel::LlmEngine);
        add(&mut graph, NodeLabel::Output);

        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedIntake));
    }

    #[test]
    fn test_disconnected_output() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &query, &llm);
        connect(&mut graph, &output, &llm);

        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedOutput));
    }

    #[test]
    fn test_direct_pipeline_is_valid() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &query, &llm);
        connect(&mut graph, &llm, &output);

        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn test_knowledge_base_intake_is_valid_without_kb_to_llm_edge() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let kb = add(&mut graph, NodeLabel::KnowledgeBase);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &query, &kb);
        connect(&mut graph, &llm, &output);

        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn test_dangling_edges_never_match() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);

        graph.add_edge(query.id().clone(), "node_404");
        graph.add_edge("node_404", output.id().clone());
        graph.add_edge("ghost", "phantom");
        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedIntake));

        connect(&mut graph, &query, &llm);
        assert_eq!(validate(&graph), Err(ValidationError::DisconnectedOutput));

        connect(&mut graph, &llm, &output);
        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn test_duplicate_and_self_edges_are_tolerated() {
        let mut graph = GraphModel::new();
        let query = add(&mut graph, NodeLabel::UserQuery);
        let llm = add(&mut graph, NodeLabel::LlmEngine);
        let output = add(&mut graph, NodeLabel::Output);
        connect(&mut graph, &query, &query);
        connect(&mut graph, &query, &llm);
        connect(&mut graph, &query, &llm);
        connect(&mut graph, &llm, &output);

        assert_eq!(validate(&graph), Ok(()));
    }
}
