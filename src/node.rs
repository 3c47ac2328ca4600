use crate::board::{Board, Move};
use std::rc::Rc;

/// A board reached during search, linked back to the node it was expanded from.
///
/// Parents are shared, so many children can hang off one ancestor. The
/// chain is acyclic because `moves` grows by one at every link.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    moves: usize,
    priority: usize,
    via: Option<Move>,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        let priority = board.manhattan();
        Self {
            board,
            moves: 0,
            priority,
            via: None,
            parent: None,
        }
    }

    pub fn child(parent: &Rc<SearchNode>, board: Board, via: Move) -> Self {
        let moves = parent.moves + 1;
        let priority = moves + board.manhattan();
        Self {
            board,
            moves,
            priority,
            via: Some(via),
            parent: Some(Rc::clone(parent)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Path length from the root of this node's frontier.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// `moves + manhattan`, fixed at construction.
    pub fn priority(&self) -> usize {
        self.priority
    }

    /// The slide that produced this node; `None` for a root.
    pub fn via(&self) -> Option<Move> {
        self.via
    }

    pub fn parent(&self) -> Option<&SearchNode> {
        self.parent.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// This node followed by each ancestor up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(self), |node| node.parent())
    }

    /// Boards from the root to this node.
    pub fn path(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = self.ancestors().map(|node| node.board.clone()).collect();
        boards.reverse();
        boards
    }

    /// Slides from the root to this node.
    pub fn steps(&self) -> Vec<Move> {
        let mut steps: Vec<Move> = self.ancestors().filter_map(|node| node.via).collect();
        steps.reverse();
        steps
    }
}
