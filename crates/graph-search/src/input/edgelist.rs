use std::{cmp::max, error::Error, iter::Copied, slice::Iter, str::FromStr};

/// Edges in file order, plus the largest vertex id they mention.
///
/// Text form: one `u v` pair per line. Blank lines and lines starting
/// with `#` are skipped. A line `n <count>` pins the vertex count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    edges: Box<[(usize, usize)]>,
    max_vertex_id: usize,
    vertex_count: Option<usize>,
}

impl EdgeList {
    pub fn new(edges: Vec<(usize, usize)>) -> Self {
        let max_vertex_id = edges
            .iter()
            .map(|(s, t)| max(*s, *t))
            .max()
            .unwrap_or(0);
        Self {
            edges: edges.into_boxed_slice(),
            max_vertex_id,
            vertex_count: None,
        }
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    pub fn max_vertex_id(&self) -> usize {
        self.max_vertex_id
    }

    /// The pinned vertex count, if the list carried one.
    pub fn vertex_count(&self) -> Option<usize> {
        self.vertex_count
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> Copied<Iter<'_, (usize, usize)>> {
        self.edges.iter().copied()
    }
}

fn parse_id(token: Option<&str>, missing: &str, line: usize) -> Result<usize, Box<dyn Error>> {
    let token = token.ok_or_else(|| format!("line {}: {}", line, missing))?;
    usize::from_str(token)
        .map_err(|e| format!("line {}: invalid vertex id '{}': {}", line, token, e).into())
}

impl FromStr for EdgeList {
    type Err = Box<dyn Error>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut edges: Vec<(usize, usize)> = vec![];
        let mut vertex_count = None;

        for (index, line) in value.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();

            let first = tokens.next();

            if first == Some("n") {
                vertex_count = Some(parse_id(tokens.next(), "No vertex count found!", line_no)?);
            } else {
                let source = parse_id(first, "No source found!", line_no)?;
                let target = parse_id(tokens.next(), "No target found!", line_no)?;
                edges.push((source, target));
            }

            if let Some(extra) = tokens.next() {
                return Err(format!("line {}: unexpected token '{}'", line_no, extra).into());
            }
        }

        let edge_list = EdgeList::new(edges);

        Ok(match vertex_count {
            Some(n) => edge_list.with_vertex_count(n),
            None => edge_list,
        })
    }
}

impl TryFrom<&String> for EdgeList {
    type Error = Box<dyn Error>;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        EdgeList::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeList;

    #[test]
    fn edgelist_from_string() {
        let string = "# comment\n\
            1 2\n\
            \n\
            1 4\n\
            2 3\n\
            4 1";

        let edge_list = EdgeList::try_from(&string.to_string()).unwrap();

        assert_eq!(edge_list.max_vertex_id(), 4);
        assert_eq!(edge_list.vertex_count(), None);
        assert_eq!(
            edge_list.edges().collect::<Vec<(usize, usize)>>(),
            vec![(1, 2), (1, 4), (2, 3), (4, 1)]
        );
    }

    #[test]
    fn edgelist_vertex_count() {
        let edge_list: EdgeList = "n 7\n1 2\n".parse().unwrap();

        assert_eq!(edge_list.vertex_count(), Some(7));
        assert_eq!(edge_list.max_vertex_id(), 2);
        assert_eq!(edge_list.len(), 1);
    }

    #[test]
    #[should_panic(expected = "line 3: No target found!")]
    fn edge_list_from_string_panic() {
        let string = "1 2\n\
            1 4\n\
            2\n\
            4 1";

        EdgeList::try_from(&string.to_string()).unwrap();
    }

    #[test]
    fn edge_list_header_token_exact() {
        assert!("node 3\n".parse::<EdgeList>().is_err());
        assert!("nope 3\n".parse::<EdgeList>().is_err());
        assert!("n\n".parse::<EdgeList>().is_err());

        let edge_list: EdgeList = "n 3\n".parse().unwrap();
        assert_eq!(edge_list.vertex_count(), Some(3));
    }

    #[test]
    fn edge_list_rejects_garbage() {
        assert!("1 x".parse::<EdgeList>().is_err());
        assert!("1 2 3".parse::<EdgeList>().is_err());
        assert!("-1 2".parse::<EdgeList>().is_err());
    }
}
