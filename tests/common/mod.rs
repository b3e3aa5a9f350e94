//! Scratch git repositories for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

pub struct ScratchRepo {
    pub dir: TempDir,
    pub repo: Repository,
    counter: usize,
}

impl ScratchRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        ScratchRepo {
            dir,
            repo,
            counter: 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Change a file and commit it with the given message
    pub fn commit(&mut self, message: &str) -> Oid {
        self.counter += 1;
        fs::write(
            self.dir.path().join("CHANGELOG.txt"),
            format!("change {}\n", self.counter),
        )
        .expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("CHANGELOG.txt"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let signature = Signature::now("Test User", "test@example.com").expect("Could not sign");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        self.repo
            .tag(name, head.as_object(), &signature, "release", false)
            .expect("Could not create annotated tag");
    }
}

/// Three releases; v1.0.0 only bounds the first range
pub fn three_releases() -> ScratchRepo {
    let mut scratch = ScratchRepo::new();
    scratch.commit("Initial commit\n\nAdded: project skeleton");
    scratch.tag("v1.0.0");
    scratch.commit("Add login\n\nAdded: login page\nType: feature");
    scratch.commit("Tidy up");
    scratch.annotated_tag("v1.1.0");
    scratch.commit("Fix crash\n\nFixed: crash on empty config\nLink: https://example.com:8080/issues/7");
    scratch.commit("Rework internals\n\njust text");
    scratch.tag("v2.0.0");
    scratch.tag("latest");
    scratch
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
