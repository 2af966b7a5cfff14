use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024", "compaction"])]
pub struct Solver;

/// A contiguous run of blocks on the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

/// Disk layout as two arenas: file spans indexed by file id, and the free
/// spans between them in disk order.
#[derive(Debug, Clone)]
pub struct Disk {
    files: Vec<Span>,
    free: Vec<Span>,
}

impl Disk {
    fn size(&self) -> usize {
        self.files
            .iter()
            .chain(&self.free)
            .map(|span| span.start + span.len)
            .max()
            .unwrap_or(0)
    }

    /// File id stored in each block, `None` for free blocks.
    fn blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = vec![None; self.size()];
        for (id, file) in self.files.iter().enumerate() {
            blocks[file.start..file.start + file.len].fill(Some(id));
        }
        blocks
    }

    /// Checksum after moving single blocks from the end into the leftmost gaps.
    fn block_compacted_checksum(&self) -> u64 {
        let blocks = self.blocks();
        let used: usize = self.files.iter().map(|file| file.len).sum();
        let mut from_end = blocks.iter().rev().flatten();

        let mut checksum = 0;
        for (position, block) in blocks.iter().take(used).enumerate() {
            let id = match block {
                Some(id) => id,
                None => match from_end.next() {
                    Some(id) => id,
                    None => break,
                },
            };
            checksum += (position * id) as u64;
        }
        checksum
    }

    /// Move each file, highest id first, into the leftmost free span that
    /// fits it and lies before it. Files move at most once.
    fn compact_files(&mut self) {
        for file in self.files.iter_mut().rev() {
            let Some(gap) = self
                .free
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len)
            else {
                continue;
            };

            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }

    fn checksum(&self) -> u64 {
        self.files
            .iter()
            .enumerate()
            .map(|(id, file)| {
                (file.start..file.start + file.len)
                    .map(|position| (position * id) as u64)
                    .sum::<u64>()
            })
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Disk;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut disk = Disk {
            files: Vec::new(),
            free: Vec::new(),
        };

        let mut start = 0;
        for (idx, c) in input.trim().chars().enumerate() {
            let len = c.to_digit(10).ok_or_else(|| {
                ParseError::InvalidFormat(format!("unexpected {c:?} at offset {idx}"))
            })? as usize;
            let span = Span { start, len };
            if idx % 2 == 0 {
                disk.files.push(span);
            } else if len > 0 {
                disk.free.push(span);
            }
            start += len;
        }

        if disk.files.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        Ok(disk)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.block_compacted_checksum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut disk = shared.clone();
        disk.compact_files();
        Ok(disk.checksum().to_string())
    }
}
