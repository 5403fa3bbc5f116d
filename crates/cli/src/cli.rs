//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use backoffice_core::models::Role;
use backoffice_core::schema::{ContentValues, UserValues};
use backoffice_core::types::DbId;

#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about = "Manage activities, categories and users")]
pub struct Cli {
    /// Override `BACKOFFICE_API_URL`.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Activities shown on the site.
    Activities {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Content categories.
    Categories {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Backoffice users.
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContentAction {
    /// Print every record as JSON.
    List,
    /// Print one record as JSON.
    Show { id: DbId },
    /// Create a record, or update it when `--id` is given.
    Save(ContentArgs),
}

#[derive(Debug, Subcommand)]
pub enum UserAction {
    List,
    Show { id: DbId },
    Save(UserArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    /// Edit this record instead of creating one.
    #[arg(long)]
    pub id: Option<DbId>,
    #[arg(long)]
    pub name: Option<String>,
    /// HTML description.
    #[arg(long)]
    pub description: Option<String>,
    /// Image file to upload. Without it the stored image is kept.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl ContentArgs {
    /// Overlay the given flags on the loaded (or default) values.
    pub fn apply(&self, values: &mut ContentValues) {
        if let Some(name) = &self.name {
            values.name = name.clone();
        }
        if let Some(description) = &self.description {
            values.description = description.clone();
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct UserArgs {
    #[arg(long)]
    pub id: Option<DbId>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Required when creating; leave out on edit to keep the current one.
    #[arg(long)]
    pub password: Option<String>,
    /// `admin` or `regular` (or the role id).
    #[arg(long)]
    pub role: Option<Role>,
    /// Profile image file.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl UserArgs {
    pub fn apply(&self, values: &mut UserValues) {
        if let Some(name) = &self.name {
            values.name = name.clone();
        }
        if let Some(email) = &self.email {
            values.email = email.clone();
        }
        if let Some(password) = &self.password {
            values.password = password.clone();
        }
        if let Some(role) = self.role {
            values.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_activity_save_with_id() {
        let cli = Cli::try_parse_from([
            "backoffice",
            "activities",
            "save",
            "--id",
            "5",
            "--name",
            "Yoga",
            "--image",
            "yoga.png",
        ])
        .unwrap();

        assert_matches!(cli.command, Command::Activities { action: ContentAction::Save(args) } => {
            assert_eq!(args.id, Some(5));
            assert_eq!(args.name.as_deref(), Some("Yoga"));
            assert_eq!(args.image, Some(PathBuf::from("yoga.png")));
            assert!(args.description.is_none());
        });
    }

    #[test]
    fn parses_user_role_by_name() {
        let cli = Cli::try_parse_from([
            "backoffice", "users", "save", "--name", "Ana", "--role", "regular",
        ])
        .unwrap();

        assert_matches!(cli.command, Command::Users { action: UserAction::Save(args) } => {
            assert_eq!(args.role, Some(Role::Regular));
            assert!(args.id.is_none());
        });
    }

    #[test]
    fn rejects_unknown_role() {
        let result = Cli::try_parse_from(["backoffice", "users", "save", "--role", "owner"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_api_url_after_subcommand() {
        let cli = Cli::try_parse_from([
            "backoffice",
            "categories",
            "show",
            "3",
            "--api-url",
            "http://api.test",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        assert_matches!(cli.command, Command::Categories { action: ContentAction::Show { id: 3 } });
    }

    #[test]
    fn apply_only_overrides_given_fields() {
        let mut values = ContentValues {
            name: "Yoga".to_string(),
            description: "<p>Morning</p>".to_string(),
            image: String::new(),
        };
        let args = ContentArgs {
            id: Some(5),
            name: None,
            description: Some("<p>Evening</p>".to_string()),
            image: None,
        };

        args.apply(&mut values);

        assert_eq!(values.name, "Yoga");
        assert_eq!(values.description, "<p>Evening</p>");
    }

    #[test]
    fn user_apply_keeps_password_blank_when_absent() {
        let mut values = UserValues::default();
        let args = UserArgs {
            id: Some(2),
            name: Some("Ana Torres".to_string()),
            email: None,
            password: None,
            role: Some(Role::Admin),
            image: None,
        };

        args.apply(&mut values);

        assert!(values.password.is_empty());
        assert_eq!(values.role, Role::Admin);
        assert_eq!(values.name, "Ana Torres");
    }
}
