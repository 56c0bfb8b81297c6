use super::*;
use crate::*;
use std::path::Path;
use std::path::PathBuf;

/// Frame samples for a single round.
///
/// Storage is allocated up front for the frames the round is expected to
/// run. Samples past that capacity are dropped; the first dropped sample
/// logs a warning and later ones are silent.
#[derive(Debug, Clone)]
pub struct Recorder {
    human_inputs: Vec<Action>,
    machine_inputs: Vec<Action>,
    human_scores: Vec<Cost>,
    machine_scores: Vec<Cost>,
    cursor: usize,
    warnings: usize,
}

impl Recorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            human_inputs: vec![0.0; capacity],
            machine_inputs: vec![0.0; capacity],
            human_scores: vec![0.0; capacity],
            machine_scores: vec![0.0; capacity],
            cursor: 0,
            warnings: 0,
        }
    }
    pub fn capacity(&self) -> usize {
        self.human_inputs.len()
    }
    /// Samples written so far.
    pub fn len(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }
    pub fn is_full(&self) -> bool {
        self.cursor >= self.capacity()
    }
    /// Overflow warnings emitted this round (never more than one).
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn append(&mut self, human: Action, machine: Action, human_cost: Cost, machine_cost: Cost) {
        if self.is_full() {
            if self.warnings == 0 {
                log::warn!(
                    "frames exceed allocated capacity ({}), no more data is being stored",
                    self.capacity()
                );
                self.warnings += 1;
            }
            return;
        }
        let i = self.cursor;
        self.human_inputs[i] = human;
        self.machine_inputs[i] = machine;
        self.human_scores[i] = human_cost;
        self.machine_scores[i] = machine_cost;
        self.cursor += 1;
    }

    /// The written prefix as an archive; unwritten capacity is left out.
    pub fn archive(&self) -> Archive {
        let n = self.cursor;
        Archive::new(
            self.human_inputs[..n].to_vec(),
            self.machine_inputs[..n].to_vec(),
            self.human_scores[..n].to_vec(),
            self.machine_scores[..n].to_vec(),
        )
    }

    /// Write the written prefix to `<root>/round_<label>/<hash>.frames.gz`.
    pub fn persist(&self, root: &Path, label: &RoundLabel) -> std::io::Result<PathBuf> {
        let directory = label.directory(root);
        std::fs::create_dir_all(&directory)?;
        let path = directory.join(format!("{}.{}", hash(), Archive::EXTENSION));
        self.archive().write(&path)?;
        log::info!("saved {} frames to {}", self.cursor, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(recorder: &mut Recorder, n: usize) {
        for i in 0..n {
            let x = i as f64 / 10.0;
            recorder.append(x, -x, x * x, 2.0 * x);
        }
    }

    #[test]
    fn starts_zeroed() {
        let recorder = Recorder::new(8);
        assert_eq!(recorder.capacity(), 8);
        assert_eq!(recorder.len(), 0);
        assert!(recorder.archive().is_empty());
    }

    #[test]
    fn overflow_is_dropped_and_warned_once() {
        let mut full = Recorder::new(5);
        fill(&mut full, 5);
        let mut over = Recorder::new(5);
        fill(&mut over, 5);
        over.append(9.0, 9.0, 9.0, 9.0);
        assert_eq!(over.len(), 5);
        assert_eq!(over.warnings(), 1);
        over.append(9.0, 9.0, 9.0, 9.0);
        over.append(9.0, 9.0, 9.0, 9.0);
        assert_eq!(over.warnings(), 1);
        assert_eq!(full.warnings(), 0);
        assert_eq!(over.archive(), full.archive());
    }

    #[test]
    fn archive_holds_written_prefix_only() {
        let mut recorder = Recorder::new(100);
        fill(&mut recorder, 7);
        let archive = recorder.archive();
        assert_eq!(archive.len(), 7);
        assert_eq!(archive.human_inputs()[6], 0.6);
        assert_eq!(archive.machine_inputs()[6], -0.6);
    }

    #[test]
    fn persist_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Recorder::new(50);
        fill(&mut recorder, 20);
        let label = RoundLabel::tagged(2, "Exp2_Pair3_Nominal");
        let path = recorder.persist(dir.path(), &label).unwrap();
        assert!(path.starts_with(dir.path().join("round_2_Exp2_Pair3_Nominal")));
        let stem = path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(stem.len(), FILE_HASH_LENGTH + 1 + Archive::EXTENSION.len());
        let loaded = Archive::read(&path).unwrap();
        assert_eq!(loaded.len(), 20);
        assert_eq!(loaded, recorder.archive());
    }

    #[test]
    fn repeated_persists_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Recorder::new(4);
        fill(&mut recorder, 4);
        let label = RoundLabel::new(1);
        let a = recorder.persist(dir.path(), &label).unwrap();
        let b = recorder.persist(dir.path(), &label).unwrap();
        assert_ne!(a, b);
        assert_eq!(std::fs::read_dir(label.directory(dir.path())).unwrap().count(), 2);
    }

    #[test]
    fn persist_propagates_filesystem_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let recorder = Recorder::new(1);
        assert!(recorder.persist(&blocker, &RoundLabel::new(1)).is_err());
    }
}
