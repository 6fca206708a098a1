//! In-memory issue tracker for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_migrator::{
    Author, Comment, IssueTracker, Label, Milestone, NewIssue, NewMilestone, RemoteMilestone,
    SourceIssue, TargetError,
};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn rejected(what: &str) -> TargetError {
    TargetError::Rejected {
        status: 422,
        message: format!("Validation Failed: {what}"),
    }
}

#[derive(Default)]
struct State {
    existing_labels: Vec<String>,
    existing_milestones: Vec<RemoteMilestone>,
    created_labels: Vec<Label>,
    created_milestones: Vec<NewMilestone>,
    created_issues: Vec<(u64, NewIssue)>,
    comments: Vec<(u64, String)>,
    body_updates: Vec<(u64, String)>,
    issue_numbers: VecDeque<u64>,
    next_issue_number: u64,
    next_milestone_number: u64,
    calls: usize,

    fail_list_labels: bool,
    fail_list_milestones: bool,
    failing_labels: HashSet<String>,
    failing_milestones: HashSet<String>,
    failing_issues: HashSet<String>,
    failing_comments: HashSet<u64>,
    failing_updates: HashSet<u64>,
}

/// Records every request and answers from memory.
pub struct MockTracker {
    state: Mutex<State>,
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_issue_number: 1,
                next_milestone_number: 1,
                ..State::default()
            }),
        }
    }

    fn with(self, f: impl FnOnce(&mut State)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub fn with_existing_labels(self, names: &[&str]) -> Self {
        self.with(|s| s.existing_labels = names.iter().map(|n| n.to_string()).collect())
    }

    pub fn with_existing_milestone(self, title: &str, number: u64) -> Self {
        self.with(|s| {
            s.existing_milestones.push(RemoteMilestone {
                number,
                title: title.to_string(),
            });
            s.next_milestone_number = s.next_milestone_number.max(number + 1);
        })
    }

    /// Issues are numbered sequentially from `first`.
    pub fn with_first_issue_number(self, first: u64) -> Self {
        self.with(|s| s.next_issue_number = first)
    }

    /// Issues take these numbers, in creation order.
    pub fn with_issue_numbers(self, numbers: &[u64]) -> Self {
        self.with(|s| s.issue_numbers = numbers.iter().copied().collect())
    }

    pub fn failing_label_listing(self) -> Self {
        self.with(|s| s.fail_list_labels = true)
    }

    pub fn failing_milestone_listing(self) -> Self {
        self.with(|s| s.fail_list_milestones = true)
    }

    pub fn failing_label(self, name: &str) -> Self {
        self.with(|s| {
            s.failing_labels.insert(name.to_string());
        })
    }

    pub fn failing_milestone(self, title: &str) -> Self {
        self.with(|s| {
            s.failing_milestones.insert(title.to_string());
        })
    }

    pub fn failing_issue(self, title: &str) -> Self {
        self.with(|s| {
            s.failing_issues.insert(title.to_string());
        })
    }

    pub fn failing_comment_on(self, issue_number: u64) -> Self {
        self.with(|s| {
            s.failing_comments.insert(issue_number);
        })
    }

    pub fn failing_update_on(self, issue_number: u64) -> Self {
        self.with(|s| {
            s.failing_updates.insert(issue_number);
        })
    }

    pub fn created_labels(&self) -> Vec<Label> {
        self.state.lock().unwrap().created_labels.clone()
    }

    pub fn created_milestones(&self) -> Vec<NewMilestone> {
        self.state.lock().unwrap().created_milestones.clone()
    }

    pub fn created_issues(&self) -> Vec<(u64, NewIssue)> {
        self.state.lock().unwrap().created_issues.clone()
    }

    pub fn comments(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn body_updates(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().body_updates.clone()
    }

    /// Total number of requests received.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn list_labels(&self) -> Result<Vec<String>, TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.fail_list_labels {
            return Err(rejected("labels unavailable"));
        }
        let mut names = s.existing_labels.clone();
        names.extend(s.created_labels.iter().map(|label| label.name.clone()));
        Ok(names)
    }

    async fn create_label(&self, label: &Label) -> Result<(), TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.failing_labels.contains(&label.name) {
            return Err(rejected(&label.name));
        }
        s.created_labels.push(label.clone());
        Ok(())
    }

    async fn list_milestones(&self) -> Result<Vec<RemoteMilestone>, TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.fail_list_milestones {
            return Err(rejected("milestones unavailable"));
        }
        Ok(s.existing_milestones.clone())
    }

    async fn create_milestone(
        &self,
        milestone: &NewMilestone,
    ) -> Result<RemoteMilestone, TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.failing_milestones.contains(&milestone.title) {
            return Err(rejected(&milestone.title));
        }
        let number = s.next_milestone_number;
        s.next_milestone_number += 1;
        s.created_milestones.push(milestone.clone());
        let created = RemoteMilestone {
            number,
            title: milestone.title.clone(),
        };
        s.existing_milestones.push(created.clone());
        Ok(created)
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<u64, TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.failing_issues.contains(&issue.title) {
            return Err(rejected(&issue.title));
        }
        let number = match s.issue_numbers.pop_front() {
            Some(number) => number,
            None => {
                let number = s.next_issue_number;
                s.next_issue_number += 1;
                number
            }
        };
        s.created_issues.push((number, issue.clone()));
        Ok(number)
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.failing_comments.contains(&issue_number) {
            return Err(rejected("comment"));
        }
        s.comments.push((issue_number, body.to_string()));
        Ok(())
    }

    async fn update_issue_body(&self, issue_number: u64, body: &str) -> Result<(), TargetError> {
        let mut s = self.state.lock().unwrap();
        s.calls += 1;
        if s.failing_updates.contains(&issue_number) {
            return Err(rejected("update"));
        }
        s.body_updates.push((issue_number, body.to_string()));
        Ok(())
    }
}

pub fn label(name: &str, color: &str) -> Label {
    Label {
        name: name.to_string(),
        color: color.to_string(),
        description: String::new(),
    }
}

pub fn milestone(title: &str, due_on: Option<&str>) -> Milestone {
    Milestone {
        title: title.to_string(),
        description: format!("{title} milestone"),
        due_on: due_on.map(str::to_string),
    }
}

pub fn comment(login: &str, body: &str) -> Comment {
    Comment {
        body: body.to_string(),
        author: Author {
            login: login.to_string(),
        },
    }
}

pub fn issue(number: u64, body: &str) -> SourceIssue {
    SourceIssue {
        number,
        title: format!("Issue {number}"),
        body: body.to_string(),
        labels: Vec::new(),
        comments: Vec::new(),
        milestone: None,
    }
}
