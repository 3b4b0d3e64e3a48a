/*
[INPUT]:  Parsed subcommand and a configured youtu client
[OUTPUT]: JSON rendering of the response plus its service status
[POS]:    Command layer - maps CLI subcommands onto typed operations
[UPDATE]: When adding operations or changing argument shapes
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use youtu_adapter::{DetectMode, ServiceResponse, YoutuClient, encode_image};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Detect faces in an image
    Detect {
        image: PathBuf,
        #[arg(long = "big-face")]
        big_face: bool,
    },
    /// Compare two faces
    Compare { image_a: PathBuf, image_b: PathBuf },
    /// Check whether a face belongs to a person
    Verify { image: PathBuf, person_id: String },
    /// Find the closest person in a group
    Identify { image: PathBuf, group_id: String },
    /// Create a person from a face image
    NewPerson {
        image: PathBuf,
        person_id: String,
        #[arg(long = "group", required = true)]
        group_ids: Vec<String>,
        #[arg(long = "name", default_value = "")]
        person_name: String,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Delete a person
    DelPerson { person_id: String },
    /// Add face images to a person
    AddFace {
        person_id: String,
        #[arg(required = true)]
        images: Vec<PathBuf>,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Delete faces from a person
    DelFace {
        person_id: String,
        #[arg(required = true)]
        face_ids: Vec<String>,
    },
    /// Set the name and/or tag of a person
    SetInfo {
        person_id: String,
        #[arg(long = "name", default_value = "")]
        person_name: String,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Show a person
    GetInfo { person_id: String },
    /// List groups
    GroupIds,
    /// List persons in a group
    PersonIds { group_id: String },
    /// List faces of a person
    FaceIds { person_id: String },
    /// Show a face
    FaceInfo { face_id: String },
    /// Print a freshly signed authorization token
    Token,
}

/// Rendered result of one command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub body: serde_json::Value,
    /// Service status; `0` for success and for local-only commands
    pub error_code: i32,
    pub error_msg: String,
}

impl Outcome {
    fn from_response<R: Serialize + ServiceResponse>(response: &R) -> Result<Self> {
        Ok(Self {
            body: serde_json::to_value(response).context("render response")?,
            error_code: response.error_code(),
            error_msg: response.error_msg().to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }
}

fn load_image(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "encoding image");
    encode_image(path).with_context(|| format!("read image {}", path.display()))
}

fn load_images(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths.iter().map(|path| load_image(path)).collect()
}

/// Run one command against the service
pub async fn run(client: &YoutuClient, command: Command) -> Result<Outcome> {
    info!(command = command_name(&command), host = %client.host(), "running command");

    match command {
        Command::Detect { image, big_face } => {
            let mode = if big_face {
                DetectMode::BigFace
            } else {
                DetectMode::Normal
            };
            let response = client.detect_face(load_image(&image)?, mode).await?;
            Outcome::from_response(&response)
        }
        Command::Compare { image_a, image_b } => {
            let response = client
                .face_compare(load_image(&image_a)?, load_image(&image_b)?)
                .await?;
            Outcome::from_response(&response)
        }
        Command::Verify { image, person_id } => {
            let response = client.face_verify(load_image(&image)?, person_id).await?;
            Outcome::from_response(&response)
        }
        Command::Identify { image, group_id } => {
            let response = client.face_identify(load_image(&image)?, group_id).await?;
            Outcome::from_response(&response)
        }
        Command::NewPerson {
            image,
            person_id,
            group_ids,
            person_name,
            tag,
        } => {
            let response = client
                .new_person(load_image(&image)?, person_id, group_ids, person_name, tag)
                .await?;
            Outcome::from_response(&response)
        }
        Command::DelPerson { person_id } => {
            let response = client.del_person(person_id).await?;
            Outcome::from_response(&response)
        }
        Command::AddFace {
            person_id,
            images,
            tag,
        } => {
            let response = client
                .add_face(load_images(&images)?, person_id, tag)
                .await?;
            Outcome::from_response(&response)
        }
        Command::DelFace {
            person_id,
            face_ids,
        } => {
            let response = client.del_face(person_id, face_ids).await?;
            Outcome::from_response(&response)
        }
        Command::SetInfo {
            person_id,
            person_name,
            tag,
        } => {
            let response = client.set_info(person_id, person_name, tag).await?;
            Outcome::from_response(&response)
        }
        Command::GetInfo { person_id } => {
            let response = client.get_info(person_id).await?;
            Outcome::from_response(&response)
        }
        Command::GroupIds => {
            let response = client.get_group_ids().await?;
            Outcome::from_response(&response)
        }
        Command::PersonIds { group_id } => {
            let response = client.get_person_ids(group_id).await?;
            Outcome::from_response(&response)
        }
        Command::FaceIds { person_id } => {
            let response = client.get_face_ids(person_id).await?;
            Outcome::from_response(&response)
        }
        Command::FaceInfo { face_id } => {
            let response = client.get_face_info(face_id).await?;
            Outcome::from_response(&response)
        }
        Command::Token => Ok(Outcome {
            body: serde_json::Value::String(client.signer().sign()),
            error_code: 0,
            error_msg: String::new(),
        }),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Detect { .. } => "detect",
        Command::Compare { .. } => "compare",
        Command::Verify { .. } => "verify",
        Command::Identify { .. } => "identify",
        Command::NewPerson { .. } => "new-person",
        Command::DelPerson { .. } => "del-person",
        Command::AddFace { .. } => "add-face",
        Command::DelFace { .. } => "del-face",
        Command::SetInfo { .. } => "set-info",
        Command::GetInfo { .. } => "get-info",
        Command::GroupIds => "group-ids",
        Command::PersonIds { .. } => "person-ids",
        Command::FaceIds { .. } => "face-ids",
        Command::FaceInfo { .. } => "face-info",
        Command::Token => "token",
    }
}
