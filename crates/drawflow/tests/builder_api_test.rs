//! Integration tests for the DrawflowBuilder API
//!
//! These tests drive the whole pipeline from model text to XML through the
//! public API only.

use drawflow::{
    ConversationTurn, DiagramKind, DrawflowBuilder, DrawflowError, Payload,
    config::AppConfig,
    diagnostics::WarningCode,
    graph::{GraphEdge, GraphNode, NodeKind, UiFlow},
    language::Language,
};

const APPROVAL: &str = "PROCESS: Validate [actor=System]\nDECISION: Approve -> Yes:Ship, No:Reject";

fn edge_line(id: u32, label: &str, source: u32, target: u32) -> String {
    format!(
        "<mxCell id=\"{id}\" value=\"{label}\" style=\"edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;\" edge=\"1\" parent=\"1\" source=\"{source}\" target=\"{target}\">"
    )
}

#[test]
fn test_builder_api_exists() {
    let _builder = DrawflowBuilder::default();
}

#[test]
fn test_approval_example_end_to_end() {
    let builder = DrawflowBuilder::default();
    let rendered = builder.render_text(DiagramKind::BusinessFlow, APPROVAL);
    let xml = rendered.xml();

    assert!(rendered.diagnostics().is_empty());
    assert_eq!(xml.matches("vertex=\"1\"").count(), 6);
    assert_eq!(xml.matches("edge=\"1\"").count(), 6);

    // start=2 Validate=3 Approve=5 Ship=7 Reject=9 End=11
    for expected in [
        edge_line(4, "", 2, 3),
        edge_line(6, "", 3, 5),
        edge_line(8, "Yes", 5, 7),
        edge_line(10, "No", 5, 9),
        edge_line(12, "", 7, 11),
        edge_line(13, "", 9, 11),
    ] {
        assert!(xml.contains(&expected), "missing `{expected}` in\n{xml}");
    }
}

#[test]
fn test_document_structure() {
    let xml = DrawflowBuilder::default()
        .render_text(DiagramKind::BusinessFlow, APPROVAL)
        .into_xml();

    assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<mxfile host=\"app.diagrams.net\""));
    assert!(xml.contains("<diagram id=\"diagram\" name=\"Generated Diagram\">"));
    assert!(xml.contains("pageWidth=\"1169\" pageHeight=\"827\""));
    assert!(xml.contains("    <mxCell id=\"0\"/>\n"));
    assert!(xml.contains("<mxCell id=\"1\" parent=\"0\"/>"));
    assert!(xml.contains("<mxGeometry x=\"250\" y=\"50\" width=\"120\" height=\"60\" as=\"geometry\"/>"));
    assert!(xml.contains("<mxGeometry relative=\"1\" as=\"geometry\"/>"));
    assert!(xml.ends_with("</mxfile>\n"));
}

#[test]
fn test_chinese_markers_label_edges() {
    let text = "PROCESS: 校验订单 [actor=系统]\nDECISION: 审批 -> 是:发货, 否:驳回";
    let xml = DrawflowBuilder::default()
        .render_text(DiagramKind::BusinessFlow, text)
        .into_xml();

    assert!(xml.contains("value=\"是\""));
    assert!(xml.contains("value=\"否\""));
    assert!(xml.contains("value=\"开始\""));
    assert!(!xml.contains("value=\"Yes\""));
}

#[test]
fn test_unstructured_text_uses_fallback() {
    let rendered =
        DrawflowBuilder::default().render_text(DiagramKind::BusinessFlow, "I am not sure.");

    assert_eq!(rendered.diagnostics().len(), 1);
    assert_eq!(rendered.diagnostics()[0].code(), Some(WarningCode::W001));
    // start, three skeleton steps, end
    assert_eq!(rendered.xml().matches("vertex=\"1\"").count(), 5);
}

#[test]
fn test_rendering_is_deterministic() {
    let first = DrawflowBuilder::default().render_text(DiagramKind::BusinessFlow, APPROVAL);
    let second = DrawflowBuilder::default().render_text(DiagramKind::BusinessFlow, APPROVAL);
    assert_eq!(first.xml(), second.xml());
}

#[test]
fn test_ui_flow_drops_dangling_edges() {
    let text = "NODE: Login [type=start]\nNODE: Home\nEDGE: Login -> Home [label=\"ok\"]\nEDGE: Home -> Settings";
    let rendered = DrawflowBuilder::default().render_text(DiagramKind::UiFlow, text);
    let xml = rendered.xml();

    assert!(rendered.diagnostics().is_empty());
    assert_eq!(xml.matches("vertex=\"1\"").count(), 2);
    assert_eq!(xml.matches("edge=\"1\"").count(), 1);
    assert!(xml.contains("value=\"ok\""));
}

#[test]
fn test_render_graph_directly() {
    let flow = UiFlow::new(
        Language::English,
        vec![
            GraphNode::new("Cart", NodeKind::Screen),
            GraphNode::new("Pay", NodeKind::Screen),
        ],
        vec![GraphEdge::new("Cart", "Pay").with_label("checkout <now>")],
    );
    let xml = drawflow::render_ui_flow(&flow);

    assert!(xml.contains("value=\"checkout &lt;now&gt;\""));
}

#[test]
fn test_prototype_render() {
    let text = "SCREEN: Login\n- Layout: form\nSCREEN: Home";
    let xml = DrawflowBuilder::default()
        .render_text(DiagramKind::Prototype, text)
        .into_xml();

    assert!(xml.contains("value=\"Prototype Screens\""));
    assert!(xml.contains("value=\"Login\""));
    assert!(xml.contains("dashed=1;"));
}

#[test]
fn test_empty_prototype_has_empty_body() {
    let xml = DrawflowBuilder::default()
        .render_text(DiagramKind::Prototype, "")
        .into_xml();

    assert!(xml.contains("<mxCell id=\"1\" parent=\"0\"/>\n      </root>"));
}

#[test]
fn test_config_changes_document_header() {
    let config: AppConfig = toml::from_str(
        r#"
        [document]
        diagram_name = "Returns"
        "#,
    )
    .expect("config should parse");
    let xml = DrawflowBuilder::new(config)
        .render_text(DiagramKind::BusinessFlow, APPROVAL)
        .into_xml();

    assert!(xml.contains("name=\"Returns\""));
}

#[test]
fn test_generate_passes_history() {
    let generator = |kind: DiagramKind, payload: &Payload| -> Result<String, String> {
        assert_eq!(kind, DiagramKind::BusinessFlow);
        assert_eq!(payload.requirements(), "refunds");
        assert_eq!(payload.history(), "USER: hello\nASSISTANT: hi");
        Ok(APPROVAL.to_string())
    };
    let history = [
        ConversationTurn::user("hello"),
        ConversationTurn::assistant("hi"),
    ];

    let rendered = DrawflowBuilder::default()
        .generate(&generator, DiagramKind::BusinessFlow, "refunds", &history)
        .expect("generation should succeed");

    assert_eq!(rendered.raw_text(), APPROVAL);
    assert!(rendered.xml().contains("value=\"Approve\""));
}

#[test]
fn test_generate_empty_history_sentinel() {
    let generator = |_: DiagramKind, payload: &Payload| -> Result<String, String> {
        Ok(format!("SCREEN: {}", payload.history()))
    };

    let rendered = DrawflowBuilder::default()
        .generate(&generator, DiagramKind::Prototype, "a shop", &[])
        .unwrap();

    assert!(rendered.xml().contains("value=\"No previous conversation.\""));
}

#[test]
fn test_generate_propagates_failure() {
    let generator =
        |_: DiagramKind, _: &Payload| -> Result<String, String> { Err("timeout".to_string()) };

    let result = DrawflowBuilder::default().generate(&generator, DiagramKind::UiFlow, "x", &[]);

    match result {
        Err(DrawflowError::Generate(err)) => assert_eq!(err.to_string(), "timeout"),
        other => panic!("expected a generation error, got {other:?}"),
    }
}
