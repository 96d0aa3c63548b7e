/*!
 * Caption projects and their storage.
 *
 * A project is a named cue list generated for one aspect ratio. Storage sits
 * behind the `ProjectRepository` trait so the caller decides where projects
 * live; `InMemoryProjectRepository` is the bundled implementation.
 * `ProjectService` drives the caption pipeline against a repository.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::captions::CaptionPipeline;
use crate::codec::{self, SubtitleFormat};
use crate::errors::CaptionError;
use crate::language_utils;
use crate::layout::{AspectRatio, LayoutConfig};
use crate::subtitle::{renumber, Cue, TranscriptionResult};
use crate::validation::CueValidator;

// @struct: Stored caption project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    // @field: Unique id
    pub id: Uuid,

    // @field: Display name
    pub name: String,

    // @field: Aspect ratio the cues were laid out for
    pub aspect_ratio: AspectRatio,

    // @field: Transcription language, ISO 639-1 when the language has one
    pub language: String,

    // @field: Final cue list
    pub cues: Vec<Cue>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a project with a fresh id
    pub fn new(name: &str, aspect_ratio: AspectRatio, language: &str, cues: Vec<Cue>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            aspect_ratio,
            language: language.to_string(),
            cues,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Storage for caption projects
pub trait ProjectRepository: Send + Sync {
    /// Look up a project by id
    fn get(&self, id: &Uuid) -> Option<Project>;

    /// Insert or replace a project
    fn put(&self, project: Project);

    /// Remove a project, returning whether it existed
    fn delete(&self, id: &Uuid) -> bool;

    /// All stored projects, oldest first
    fn list(&self) -> Vec<Project>;
}

/// Process-local repository; clones share the same storage
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects
    pub fn len(&self) -> usize {
        self.projects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.read().is_empty()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn get(&self, id: &Uuid) -> Option<Project> {
        self.projects.read().get(id).cloned()
    }

    fn put(&self, project: Project) {
        let mut projects = self.projects.write();
        debug!("Storing project {} ({} cues)", project.id, project.cues.len());
        projects.insert(project.id, project);
    }

    fn delete(&self, id: &Uuid) -> bool {
        self.projects.write().remove(id).is_some()
    }

    fn list(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self.projects.read().values().cloned().collect();
        projects.sort_by_key(|p| p.created_at);
        projects
    }
}

/// Project operations on top of an injected repository
pub struct ProjectService<R: ProjectRepository> {
    repository: R,
    pipeline: CaptionPipeline,
    layouts: HashMap<AspectRatio, LayoutConfig>,
    validator: CueValidator,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Create a service using the built-in layout presets
    pub fn new(repository: R, pipeline: CaptionPipeline) -> Self {
        Self {
            repository,
            pipeline,
            layouts: HashMap::new(),
            validator: CueValidator::new(),
        }
    }

    /// Override the layout used for one aspect ratio
    pub fn with_layout(mut self, aspect: AspectRatio, layout: LayoutConfig) -> Self {
        self.layouts.insert(aspect, layout);
        self
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn layout_for(&self, aspect: AspectRatio) -> LayoutConfig {
        self.layouts.get(&aspect).copied().unwrap_or_else(|| aspect.layout())
    }

    /// Run the pipeline and store the result as a new project
    pub fn create_from_transcription(
        &self,
        name: &str,
        transcription: &TranscriptionResult,
        aspect: AspectRatio,
    ) -> Result<Project, CaptionError> {
        let cues = self.pipeline.transform(transcription, &self.layout_for(aspect))?;
        let language = language_utils::normalize_to_part1_or_part2t(&transcription.language)
            .unwrap_or_else(|_| transcription.language.clone());
        let project = Project::new(name, aspect, &language, cues);

        info!("Created project '{}' ({}, {} cues)", project.name, aspect, project.cues.len());
        self.repository.put(project.clone());
        Ok(project)
    }

    /// Fetch a project or fail with `ProjectNotFound`
    pub fn get(&self, id: &Uuid) -> Result<Project, CaptionError> {
        self.repository
            .get(id)
            .ok_or_else(|| CaptionError::ProjectNotFound(id.to_string()))
    }

    /// Replace a project's cues with a manually edited list.
    ///
    /// The list is renumbered first; any remaining invariant violation rejects
    /// the edit and leaves the stored project untouched.
    pub fn update_cues(&self, id: &Uuid, mut cues: Vec<Cue>) -> Result<Project, CaptionError> {
        let mut project = self.get(id)?;

        renumber(&mut cues);
        let result = self.validator.validate(&cues);
        if !result.passed {
            return Err(CaptionError::InvalidCues(result.summary()));
        }

        project.cues = cues;
        project.updated_at = Utc::now();
        self.repository.put(project.clone());
        Ok(project)
    }

    /// Serialize a project's cues
    pub fn export(&self, id: &Uuid, format: SubtitleFormat) -> Result<String, CaptionError> {
        let project = self.get(id)?;
        Ok(codec::serialize(&project.cues, format))
    }

    /// Remove a project
    pub fn delete(&self, id: &Uuid) -> Result<(), CaptionError> {
        if self.repository.delete(id) {
            Ok(())
        } else {
            Err(CaptionError::ProjectNotFound(id.to_string()))
        }
    }
}
