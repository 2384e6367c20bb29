/// Banner printed before every choice unless the session is quiet.
pub const MENU: &str = "Dynamic Graph Menu:
1. Add Vertex
2. Remove Vertex
3. Add Edge
4. Remove Edge
5. Compute Shortest Path
6. Print Graph
0. Exit
Enter your choice:
";

pub const PROMPT_LABEL: &str = "Enter vertex label: ";
pub const PROMPT_REMOVE_LABEL: &str = "Enter vertex label to remove: ";
pub const PROMPT_FIRST: &str = "Enter first vertex label: ";
pub const PROMPT_SECOND: &str = "Enter second vertex label: ";
pub const PROMPT_WEIGHT: &str = "Enter edge weight: ";
pub const PROMPT_START: &str = "Enter start vertex label: ";
pub const PROMPT_END: &str = "Enter end vertex label: ";

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    AddVertex = 1,
    RemoveVertex = 2,
    AddEdge = 3,
    RemoveEdge = 4,
    ShortestPath = 5,
    PrintGraph = 6,
}

impl MenuChoice {
    /// Parse a menu token. Anything but the numbers `0` to `6` is `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.parse::<u8>().ok()? {
            0 => Some(Self::Exit),
            1 => Some(Self::AddVertex),
            2 => Some(Self::RemoveVertex),
            3 => Some(Self::AddEdge),
            4 => Some(Self::RemoveEdge),
            5 => Some(Self::ShortestPath),
            6 => Some(Self::PrintGraph),
            _ => None,
        }
    }

    /// The number the user types for this entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Operation name used in JSON output.
    #[must_use]
    pub const fn op(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::AddVertex => "add_vertex",
            Self::RemoveVertex => "remove_vertex",
            Self::AddEdge => "add_edge",
            Self::RemoveEdge => "remove_edge",
            Self::ShortestPath => "shortest_path",
            Self::PrintGraph => "graph",
        }
    }
}
