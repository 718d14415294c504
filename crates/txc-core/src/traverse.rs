//! Descendant-tree traversal engine
//!
//! Level-synchronous breadth-first expansion of the taxonomic tree. Each
//! generation is fully resolved (name/rank per id, then children per node)
//! before the next one starts; within a generation the independent lookups
//! run on a bounded concurrent stream whose results come back in discovery
//! order, so the output is deterministic regardless of completion order.
//!
//! The engine never revisits an id, never expands the "environmental
//! samples" placeholder bin, and records every permanently failed lookup in
//! the result instead of dropping it.

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info, warn};

use txc_common::types::{Rank, TaxonId, TaxonName, TaxonNode};
use txc_entrez::{Database, EntrezClient};

/// Non-taxonomic catch-all bin that must never be expanded.
///
/// Its children are unbounded and not meaningful; the node itself is still
/// recorded as visited.
pub const PLACEHOLDER_NAME: &str = "environmental samples";

/// Traversal tuning knobs
///
/// Depth and node budgets are deliberately opt-in: the taxonomy is a finite
/// tree and unbounded traversal is the reference behavior. Cost is O(number
/// of descendant nodes) remote queries either way.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Concurrent in-flight lookups within a generation (default: 3, the
    /// E-utilities anonymous rate limit)
    pub concurrency: usize,
    /// Stop expanding below this generation depth (None for unbounded)
    pub max_depth: Option<usize>,
    /// Stop discovering once this many nodes have been visited (None for
    /// unbounded)
    pub max_nodes: Option<usize>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            concurrency: 3,
            max_depth: None,
            max_nodes: None,
        }
    }
}

impl TraversalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

/// Outcome of expanding one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    /// Children discovered from this node, in directory order, minus ids
    /// already visited in an earlier generation
    Children(Vec<TaxonId>),
    /// Placeholder bin: recorded but deliberately never queried for children
    Placeholder,
    /// The children query failed past the retry policy
    Failed(String),
}

impl Expansion {
    /// Child ids contributed to the next generation (empty for placeholder
    /// and failed nodes)
    pub fn child_ids(&self) -> &[TaxonId] {
        match self {
            Expansion::Children(ids) => ids,
            _ => &[],
        }
    }
}

/// One visited node plus its expansion outcome
#[derive(Debug, Clone, Serialize)]
pub struct GenerationNode {
    pub node: TaxonNode,
    pub expansion: Expansion,
}

/// All nodes discovered at one traversal depth, in discovery order
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub depth: usize,
    pub nodes: Vec<GenerationNode>,
}

impl Generation {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of the nodes in this generation, in discovery order
    pub fn node_ids(&self) -> Vec<TaxonId> {
        self.nodes.iter().map(|entry| entry.node.id).collect()
    }
}

/// A taxon whose name/rank fetch permanently failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedTaxon {
    pub id: TaxonId,
    pub error: String,
}

/// The complete traversal outcome
///
/// `generations` runs from depth 0 (the root) through the recorded empty
/// "no further children" generation. `ranks` maps every visited name to the
/// rank first determined for it; a later lookup of the same name never
/// overwrites it.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub generations: Vec<Generation>,
    pub ranks: HashMap<TaxonName, Rank>,
    pub failed: Vec<FailedTaxon>,
}

impl TraversalResult {
    /// Total visited nodes across all generations
    pub fn node_count(&self) -> usize {
        self.generations.iter().map(|g| g.nodes.len()).sum()
    }

    /// Every visited node, generation by generation, in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &GenerationNode> {
        self.generations.iter().flat_map(|g| g.nodes.iter())
    }

    /// Number of generations that actually hold nodes
    pub fn depth(&self) -> usize {
        self.generations.iter().filter(|g| !g.is_empty()).count()
    }
}

/// Walk the descendant tree below `root`, breadth-first.
///
/// Never fails as a whole: per-id fetch failures become [`FailedTaxon`]
/// entries and per-node children-query failures become
/// [`Expansion::Failed`], while the rest of the tree keeps expanding.
/// Termination is guaranteed by the visited set plus the finite tree;
/// the final element of `generations` is always the recorded empty one.
pub async fn traverse(
    client: &EntrezClient,
    root: TaxonId,
    config: &TraversalConfig,
) -> TraversalResult {
    let concurrency = config.concurrency.max(1);

    let mut generations: Vec<Generation> = Vec::new();
    let mut ranks: HashMap<TaxonName, Rank> = HashMap::new();
    let mut failed: Vec<FailedTaxon> = Vec::new();
    let mut visited: HashSet<TaxonId> = HashSet::from([root]);
    let mut candidates: Vec<TaxonId> = vec![root];
    let mut depth = 0usize;
    let mut budget_exhausted = false;

    loop {
        if candidates.is_empty() {
            // Keep the already-discovered leaf generation and record the
            // empty "no further children" generation after it.
            generations.push(Generation {
                depth,
                nodes: Vec::new(),
            });
            break;
        }

        // Resolve name and rank for every candidate id of this generation.
        let fetched: Vec<_> = stream::iter(candidates.iter().copied())
            .map(|id| async move { (id, client.fetch(id, Database::Taxonomy).await) })
            .buffered(concurrency)
            .collect()
            .await;

        let mut nodes: Vec<GenerationNode> = Vec::with_capacity(fetched.len());
        for (id, outcome) in fetched {
            match outcome {
                Ok(Some(record)) => {
                    let node = record.to_node();
                    info!("{} is of rank {}", node.name, node.rank);
                    ranks
                        .entry(node.name.clone())
                        .or_insert_with(|| node.rank.clone());
                    let expansion = if is_placeholder(&node.name) {
                        debug!(%id, "Placeholder bin recorded, will not be expanded");
                        Expansion::Placeholder
                    } else {
                        Expansion::Children(Vec::new())
                    };
                    nodes.push(GenerationNode { node, expansion });
                },
                Ok(None) => {
                    warn!(%id, "Directory returned no record, marking taxon as failed");
                    failed.push(FailedTaxon {
                        id,
                        error: "no record returned by the directory".to_string(),
                    });
                },
                Err(e) => {
                    warn!(%id, error = %e, "Taxon fetch failed, marking and continuing");
                    failed.push(FailedTaxon {
                        id,
                        error: e.to_string(),
                    });
                },
            }
        }

        // List children of every expandable node of this generation.
        let queries: Vec<(usize, TaxonName)> = nodes
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches!(entry.expansion, Expansion::Children(_)))
            .map(|(idx, entry)| (idx, entry.node.name.clone()))
            .collect();

        let depth_reached = config.max_depth.is_some_and(|max| depth >= max);
        let mut next: Vec<TaxonId> = Vec::new();

        if depth_reached {
            if !queries.is_empty() {
                debug!(depth, "Maximum depth reached, not expanding further");
            }
        } else {
            let listed: Vec<_> = stream::iter(queries)
                .map(|(idx, name)| async move { (idx, client.search_children(&name).await) })
                .buffered(concurrency)
                .collect()
                .await;

            for (idx, outcome) in listed {
                match outcome {
                    Ok(child_ids) => {
                        let mut kept = Vec::with_capacity(child_ids.len());
                        for child in child_ids {
                            // No-revisit: an id already seen in any earlier
                            // generation (or under another parent in this
                            // one) is not queued again.
                            if !visited.insert(child) {
                                continue;
                            }
                            if config.max_nodes.is_some_and(|max| visited.len() > max) {
                                visited.remove(&child);
                                budget_exhausted = true;
                                continue;
                            }
                            kept.push(child);
                            next.push(child);
                        }
                        nodes[idx].expansion = Expansion::Children(kept);
                    },
                    Err(e) => {
                        warn!(
                            parent = %nodes[idx].node.name,
                            error = %e,
                            "Children listing failed, node will not be expanded"
                        );
                        nodes[idx].expansion = Expansion::Failed(e.to_string());
                    },
                }
            }
        }

        info!("found {} children taxa below generation {}", next.len(), depth);
        generations.push(Generation { depth, nodes });
        candidates = next;
        depth += 1;
    }

    if budget_exhausted {
        warn!(
            max_nodes = ?config.max_nodes,
            "Node budget reached, descendant discovery was truncated"
        );
    }

    TraversalResult {
        generations,
        ranks,
        failed,
    }
}

/// Placeholder check, tolerant of casing variants of the literal
fn is_placeholder(name: &TaxonName) -> bool {
    name.as_str().eq_ignore_ascii_case(PLACEHOLDER_NAME)
}
