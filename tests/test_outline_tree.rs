//! Integration tests for outline structure.
//!
//! Exercises parent and sibling lookup, structural edits, and the
//! sequence-label and traversal rules with property tests.

use pdf_outline::{is_valid_seq, Error, Level, NodeId, Outline, OutlineBuilder, OutlineOptions};
use proptest::prelude::*;

#[test]
fn test_unattached_parent_fails() {
    let mut outline = Outline::new();
    let loose = outline.create_node("Appendix A", Some(300), 0);

    let err = outline.parent(loose).expect_err("unattached node must not have a parent");
    assert!(matches!(err, Error::UnattachedNode { ref title } if title == "Appendix A"));
    assert!(err.to_string().contains("Appendix A"));
}

#[test]
fn test_owner_list_of_single_top_level_child() -> Result<(), Box<dyn std::error::Error>> {
    let mut outline = Outline::new();
    let root = outline.root();
    let only = outline.create_node("Only", Some(1), 0);
    outline.attach_child(root, only)?;

    let owners = outline.owner_list(only)?;
    assert_eq!(owners, &[only]);
    Ok(())
}

#[test]
fn test_move_subtree_between_parents() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = OutlineBuilder::new();
    builder.item("Chapter 1", Some(1))?;
    builder.child("Misplaced", Some(30))?;
    builder.child("Detail", Some(31))?;
    builder.root();
    builder.item("Chapter 2", Some(20))?;
    let mut outline = builder.build();

    let root = outline.root();
    let [chapter_one, chapter_two]: [NodeId; 2] = outline
        .children(root)?
        .try_into()
        .expect("Outline should have had exactly two chapters");
    let misplaced = outline.children(chapter_one)?[0];

    outline.detach(misplaced)?;
    outline.attach_child(chapter_two, misplaced)?;

    assert!(outline.children(chapter_one)?.is_empty());
    assert_eq!(outline.parent(misplaced)?, chapter_two);
    assert_eq!(
        outline.to_text()?,
        "Chapter 1  1\nChapter 2  20\n\tMisplaced  30\n\t\tDetail  31\n"
    );
    Ok(())
}

#[test]
fn test_levels_follow_depth() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = OutlineBuilder::new();
    builder.item("a", None)?;
    builder.child("b", None)?;
    builder.child("c", None)?;
    let outline = builder.build();

    let levels: Vec<i32> = outline
        .preorder(outline.root())?
        .map(|(_, node)| node.level().as_i32())
        .collect();
    assert_eq!(levels, vec![0, 1, 2]);
    assert_eq!(outline.node(outline.root())?.level(), Level::Root);
    Ok(())
}

#[test]
fn test_root_title_and_seq_are_fixed() {
    let mut outline = Outline::new();
    let root = outline.root();

    match outline.node_mut(root) {
        Err(Error::RootNotEditable) => {},
        Ok(node) => {
            node.set_title("Chapter 9");
            node.set_seq(Some("1.2"));
            panic!("root should not be editable");
        },
        Err(other) => panic!("expected RootNotEditable, got {}", other),
    }

    let root_node = outline.node(root).expect("root exists");
    assert_eq!(root_node.title(), "root");
    assert_eq!(root_node.seq(), None);
    let err = outline.parent(root).expect_err("root has no parent");
    assert_eq!(err.to_string(), "Bookmark 'root' has no parent");
}

#[test]
fn test_deep_chain_stops_at_depth_limit() -> Result<(), Box<dyn std::error::Error>> {
    let max_depth = OutlineOptions::default().max_depth;
    let mut builder = OutlineBuilder::new();
    builder.item("level 0", None)?;

    let mut failure = None;
    for level in 1..300u32 {
        if let Err(err) = builder.child(format!("level {}", level), None) {
            failure = Some((level, err));
            break;
        }
    }
    let (level, err) = failure.expect("chain should hit the depth limit");
    assert_eq!(level, max_depth);
    assert!(matches!(err, Error::DepthLimitExceeded { .. }));

    // Whatever the builder accepted can be rendered in full
    let outline = builder.build();
    let text = outline.to_text()?;
    assert_eq!(text.lines().count(), max_depth as usize);
    assert_eq!(outline.preorder(outline.root())?.count(), max_depth as usize);

    let first = outline.children(outline.root())?[0];
    assert_eq!(outline.subtree_text(first)?, text);
    Ok(())
}

#[test]
fn test_seq_edge_cases() {
    let mut outline = Outline::new();
    let id = outline.create_node("x", None, 0);
    let node = outline.node_mut(id).expect("node exists");

    for bad in ["", "5", "5.", "5.a", "v1.2", "1.2.3-rc"] {
        node.set_seq(Some("1.1"));
        node.set_seq(Some(bad));
        assert_eq!(node.seq(), None, "{:?} should be dropped", bad);
    }
}

/// Build a random outline from a list of (parent choice, page) pairs.
///
/// Each new node goes under the root or under an already created node, so
/// every generated shape is a valid tree.
fn random_outline(spec: &[(usize, Option<i32>)]) -> (Outline, Vec<NodeId>) {
    let mut outline = Outline::new();
    let mut created: Vec<NodeId> = Vec::new();
    for (i, &(choice, page)) in spec.iter().enumerate() {
        let parent = if created.is_empty() || choice % (created.len() + 1) == 0 {
            outline.root()
        } else {
            created[choice % (created.len() + 1) - 1]
        };
        let depth = outline
            .node(parent)
            .unwrap()
            .level()
            .child()
            .depth()
            .unwrap();
        let id = outline.create_node(format!("node {}", i), page, depth);
        outline.attach_child(parent, id).unwrap();
        created.push(id);
    }
    (outline, created)
}

/// Reference pre-order over the public child lists.
fn manual_preorder(outline: &Outline, id: NodeId, out: &mut Vec<NodeId>) {
    if !outline.node(id).unwrap().is_root() {
        out.push(id);
    }
    for &child in outline.children(id).unwrap() {
        manual_preorder(outline, child, out);
    }
}

proptest! {
    #[test]
    fn prop_valid_seq_round_trips(parts in prop::collection::vec(0u32..100_000, 2..6)) {
        let label = parts.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(".");
        let mut outline = Outline::new();
        let id = outline.create_node("entry", None, 0);
        let node = outline.node_mut(id).unwrap();
        node.set_seq(Some(label.as_str()));
        prop_assert_eq!(node.seq(), Some(label.as_str()));
    }

    #[test]
    fn prop_seq_matches_dotted_digits_only(candidate in "[0-9.a ]{0,8}") {
        let expected = !candidate.is_empty()
            && candidate.split('.').count() >= 2
            && candidate
                .split('.')
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(is_valid_seq(&candidate), expected);
    }

    #[test]
    fn prop_traverse_is_preorder(spec in prop::collection::vec((0usize..50, prop::option::of(0i32..500)), 0..40)) {
        let (outline, created) = random_outline(&spec);

        let mut visited = Vec::new();
        outline.traverse(outline.root(), |id, _| visited.push(id)).unwrap();

        let mut expected = Vec::new();
        manual_preorder(&outline, outline.root(), &mut expected);
        prop_assert_eq!(&visited, &expected);

        // every non-root node exactly once
        let mut sorted = visited.clone();
        sorted.sort();
        let mut all = created.clone();
        all.sort();
        prop_assert_eq!(sorted, all);
        prop_assert!(!visited.contains(&outline.root()));
    }

    #[test]
    fn prop_one_line_per_node(spec in prop::collection::vec((0usize..50, prop::option::of(0i32..500)), 0..40)) {
        let (outline, created) = random_outline(&spec);
        let text = outline.to_text().unwrap();
        prop_assert_eq!(text.lines().count(), created.len());

        for ((id, node), line) in outline.preorder(outline.root()).unwrap().zip(text.lines()) {
            let depth = node.level().depth().unwrap() as usize;
            let page = node.page_num().map(|p| p.to_string()).unwrap_or_default();
            prop_assert_eq!(line, format!("{}{}  {}", "\t".repeat(depth), node.title(), page));
            prop_assert_eq!(outline.render_line(id).unwrap(), format!("{}\n", line));
        }
    }
}
