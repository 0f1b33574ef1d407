use crate::areas::comparison::{Comparison, FileComparison};
use crate::areas::workspace::{Workspace, read_text};
use crate::artifacts::diff::edit_script::DiffStat;
use crate::artifacts::diff::line_sequence::LINE_ENDING;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

impl Comparison {
    /// Compares two files or two directory trees and writes the transcripts.
    pub async fn compare(&self, older: &Path, newer: &Path) -> anyhow::Result<()> {
        match (older.is_dir(), newer.is_dir()) {
            (true, true) => self.compare_dirs(older, newer).await,
            (false, false) => self.compare_files(older, newer).await,
            _ => anyhow::bail!(
                "cannot compare a file with a directory: {} and {}",
                older.display(),
                newer.display()
            ),
        }
    }

    pub async fn compare_files(&self, older: &Path, newer: &Path) -> anyhow::Result<()> {
        let (older_text, newer_text) = tokio::try_join!(read_text(older), read_text(newer))?;

        if older_text.is_none() && newer_text.is_none() {
            anyhow::bail!(
                "neither {} nor {} exists",
                older.display(),
                newer.display()
            );
        }

        let comparison = FileComparison::compute(
            older.to_path_buf(),
            newer.to_path_buf(),
            older_text,
            newer_text,
            self.algorithm(),
        );

        let changed = usize::from(!comparison.is_identical());
        let mut total = DiffStat::default();
        self.print_comparison(&comparison, &mut total)?;
        if self.options().stat_only {
            self.print_total(changed, &total)?;
        }

        Ok(())
    }

    pub async fn compare_dirs(&self, older: &Path, newer: &Path) -> anyhow::Result<()> {
        let older = Workspace::new(older.into());
        let newer = Workspace::new(newer.into());

        let mut files = older.list_files()?;
        files.extend(newer.list_files()?);
        log::info!(
            "comparing {} files between {} and {} using {}",
            files.len(),
            older.path().display(),
            newer.path().display(),
            self.algorithm()
        );

        let handles = files
            .into_iter()
            .map(|file| {
                let older = older.clone();
                let newer = newer.clone();
                let algorithm = self.algorithm();

                tokio::spawn(async move {
                    let (older_text, newer_text) =
                        tokio::try_join!(older.read_file(&file), newer.read_file(&file))?;
                    let older_path = older.path().join(&file);
                    let newer_path = newer.path().join(&file);

                    let comparison = tokio::task::spawn_blocking(move || {
                        FileComparison::compute(
                            older_path, newer_path, older_text, newer_text, algorithm,
                        )
                    })
                    .await
                    .context("diff task failed")?;

                    anyhow::Ok(comparison)
                })
            })
            .collect::<Vec<_>>();

        let mut total = DiffStat::default();
        let mut changed = 0;
        for handle in handles {
            let comparison = handle.await.context("comparison task panicked")??;
            if !comparison.is_identical() {
                changed += 1;
            }
            self.print_comparison(&comparison, &mut total)?;
        }

        if self.options().stat_only {
            self.print_total(changed, &total)?;
        }

        Ok(())
    }

    fn print_comparison(
        &self,
        comparison: &FileComparison,
        total: &mut DiffStat,
    ) -> anyhow::Result<()> {
        if comparison.is_identical() {
            log::debug!("{} is unchanged", comparison.newer_path.display());
            return Ok(());
        }

        let stat = comparison.stat();
        total.unchanged += stat.unchanged;
        total.insertions += stat.insertions;
        total.deletions += stat.deletions;

        if self.options().stat_only {
            write!(
                self.writer(),
                " {} | {}{}",
                comparison.newer_path.display(),
                stat,
                LINE_ENDING
            )?;
            return Ok(());
        }

        self.print_header(comparison)?;

        if self.options().color {
            let mut writer = self.writer();
            comparison.write_colored(writer.as_mut())?;
        } else {
            write!(self.writer(), "{}", comparison.patch())?;
        }

        Ok(())
    }

    fn print_header(&self, comparison: &FileComparison) -> anyhow::Result<()> {
        write!(
            self.writer(),
            "{}{}",
            format!(
                "diff {} {}",
                comparison.older_path.display(),
                comparison.newer_path.display()
            )
            .bold(),
            LINE_ENDING
        )?;

        if comparison.is_added() {
            write!(self.writer(), "{}{}", "new file".bold(), LINE_ENDING)?;
        } else if comparison.is_deleted() {
            write!(self.writer(), "{}{}", "deleted file".bold(), LINE_ENDING)?;
        }

        Ok(())
    }

    fn print_total(&self, changed: usize, total: &DiffStat) -> anyhow::Result<()> {
        write!(
            self.writer(),
            " {} file{} changed, {}{}",
            changed,
            if changed == 1 { "" } else { "s" },
            total,
            LINE_ENDING
        )?;

        Ok(())
    }
}
