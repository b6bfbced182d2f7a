//! Estate admin CLI entry point.
//!
//! Each subcommand opens a page, runs one admin operation against the
//! backend, waits for every request it triggered, then prints the page.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use estate_admin::domain::{
    Activation, ListingType, LocationForm, LoginForm, OfficeRequestForm, PropertyFilter, RecordId,
    RegisterAdminForm, ServiceTypeForm, VerificationEdit, VerificationForm,
};
use estate_admin::infra::api::HttpAdminApi;
use estate_admin::infra::app_config::{load_config, save_config};
use estate_admin::infra::storage::PersistedStorage;
use estate_admin::ui::app::{
    Action, AdminApp, AppView, AuthAction, ComplaintsAction, NavigationAction, OfficeAction,
    RealEstateAction, ServicesAction, VerificationAction,
};
use estate_admin::ui::components::Banner;
use estate_admin::ui::views;

#[derive(Parser, Debug)]
#[command(name = "estate-admin")]
#[command(version)]
#[command(about = "Admin console for the real-estate marketplace backend", long_about = None)]
struct Args {
    /// Backend base URL for this run (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in as an administrator and keep the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Register another administrator account
    RegisterAdmin {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Counters and the office list
    Dashboard,

    /// List office accounts and sent office requests
    Offices,
    /// Delete an office account
    DeleteOffice { id: RecordId },
    /// Send an office request made of `key=value` fields
    SendOfficeRequest {
        #[arg(value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Delete a sent office request
    DeleteOfficeRequest { id: RecordId },

    /// List cities and districts
    Locations,
    AddLocation {
        #[arg(long)]
        city: String,
        #[arg(long)]
        district: String,
    },
    DeleteLocation { id: RecordId },

    /// List service types, optionally with the services of one type
    Services {
        #[arg(long)]
        select: Option<RecordId>,
    },
    CreateServiceType { name: String },
    DeleteServiceType { id: RecordId },
    /// Delete a service; give the owning office to see its refreshed profile
    DeleteService {
        id: RecordId,
        #[arg(long)]
        office: Option<RecordId>,
    },

    /// One page of verifications
    Verifications {
        #[arg(long, default_value = "1")]
        page: u32,
    },
    CreateVerification {
        #[arg(long)]
        national_no: String,
        #[arg(long)]
        identity_no: String,
        #[arg(long)]
        user_id: RecordId,
        #[arg(long)]
        identity_image: PathBuf,
        #[arg(long)]
        contract_image: PathBuf,
    },
    /// Edit a verification listed on `--page`
    UpdateVerification {
        id: RecordId,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        national_no: Option<String>,
        #[arg(long)]
        identity_no: Option<String>,
        #[arg(long)]
        user_id: Option<RecordId>,
        /// 1/0, active/inactive
        #[arg(long)]
        activation: Option<Activation>,
        #[arg(long)]
        identity_image: Option<PathBuf>,
        #[arg(long)]
        contract_image: Option<PathBuf>,
    },
    DeleteVerification {
        id: RecordId,
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Search property listings
    Properties {
        #[arg(long, default_value = "1")]
        page: u32,
        /// sale or rent
        #[arg(long = "type")]
        listing_type: Option<ListingType>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        max_price: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Details of one property
    Property { id: RecordId },
    /// Delete a property from the listing, or from an office's profile
    DeleteProperty {
        id: RecordId,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, conflicts_with = "page")]
        office: Option<RecordId>,
    },
    /// An office's profile: contact, listings and services
    Profile { id: RecordId },

    /// The complaints inbox
    Complaints {
        #[arg(long)]
        resolve: Option<RecordId>,
    },

    /// Show the config, or store a new backend URL in it
    Config {
        #[arg(long)]
        set_api_url: Option<String>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = load_config();
    if let Commands::Config { set_api_url } = &args.command {
        if let Some(url) = set_api_url {
            config.api_base_url = url.trim().to_string();
            save_config(&config).context("Failed to save config")?;
        }
        print!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
        return Ok(());
    }
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }

    let storage = Arc::new(PersistedStorage::new(config.storage_path()));
    let api = Arc::new(HttpAdminApi::new(config.api_base_url.clone(), storage.clone()));
    let mut app = AdminApp::new(api, storage);

    let patch = DraftPatch::from_command(&args.command);
    for action in actions(args.command) {
        app.dispatch(action);
        app.settle().await;
    }
    if let Some(patch) = patch {
        // Without a session the guard already sent us to the login page.
        if let Some(draft) = app.state.verification.editing.clone() {
            let draft = patch.apply(draft);
            app.dispatch(Action::Verification(VerificationAction::UpdateDraft(draft)));
            app.dispatch(Action::Verification(VerificationAction::SubmitEdit));
            app.settle().await;
        } else if app.state.ui.current_view == AppView::VerificationList {
            anyhow::bail!("verification is not listed on that page");
        }
    }

    let screen = views::render(&app.state);
    print!("{screen}");
    if screen.banners.iter().any(|b| matches!(b, Banner::Error(_)))
        || !app.state.ui.form_errors.is_empty()
    {
        std::process::exit(1);
    }
    Ok(())
}

fn open(view: AppView) -> Action {
    Action::Navigation(NavigationAction::SwitchTo(view))
}

/// Opening the list loads page 1; other pages are one more fetch.
fn verification_page(page: u32) -> Vec<Action> {
    let mut out = vec![open(AppView::VerificationList)];
    if page != 1 {
        out.push(Action::Verification(VerificationAction::GoToPage(page)));
    }
    out
}

/// Field changes for `update-verification`, applied to the draft the list
/// page opens for the record.
#[derive(Debug, Default)]
struct DraftPatch {
    national_no: Option<String>,
    identity_no: Option<String>,
    user_id: Option<RecordId>,
    activation: Option<Activation>,
    identity_image: Option<PathBuf>,
    contract_image: Option<PathBuf>,
}

impl DraftPatch {
    fn from_command(command: &Commands) -> Option<Self> {
        match command {
            Commands::UpdateVerification {
                national_no,
                identity_no,
                user_id,
                activation,
                identity_image,
                contract_image,
                ..
            } => Some(Self {
                national_no: national_no.clone(),
                identity_no: identity_no.clone(),
                user_id: *user_id,
                activation: *activation,
                identity_image: identity_image.clone(),
                contract_image: contract_image.clone(),
            }),
            _ => None,
        }
    }

    fn apply(self, mut draft: VerificationEdit) -> VerificationEdit {
        if let Some(v) = self.national_no {
            draft.national_no = v;
        }
        if let Some(v) = self.identity_no {
            draft.identity_no = v;
        }
        if self.user_id.is_some() {
            draft.user_id = self.user_id;
        }
        if let Some(v) = self.activation {
            draft.activation = v;
        }
        draft.identity_image = self.identity_image;
        draft.contract_image = self.contract_image;
        draft
    }
}

/// The actions a subcommand stands for, in dispatch order. Each one is
/// settled before the next is sent.
fn actions(command: Commands) -> Vec<Action> {
    match command {
        Commands::Login { email, password } => vec![
            open(AppView::Login),
            Action::Auth(AuthAction::Login(LoginForm { email, password })),
        ],
        Commands::Logout => vec![Action::Auth(AuthAction::Logout)],
        Commands::RegisterAdmin {
            name,
            email,
            password,
        } => vec![
            open(AppView::RegisterAdmin),
            Action::Auth(AuthAction::RegisterAdmin(RegisterAdminForm {
                name,
                email,
                password,
            })),
        ],
        Commands::Dashboard => vec![open(AppView::Dashboard)],
        Commands::Offices => vec![open(AppView::OfficeManagement)],
        Commands::DeleteOffice { id } => vec![
            open(AppView::OfficeManagement),
            Action::Office(OfficeAction::DeleteOffice(id)),
        ],
        Commands::SendOfficeRequest { fields } => vec![
            open(AppView::OfficeManagement),
            Action::Office(OfficeAction::SendRequest(OfficeRequestForm {
                fields: fields.into_iter().collect::<BTreeMap<_, _>>(),
            })),
        ],
        Commands::DeleteOfficeRequest { id } => vec![
            open(AppView::OfficeManagement),
            Action::Office(OfficeAction::DeleteRequest(id)),
        ],
        Commands::Locations => vec![open(AppView::LocationManagement)],
        Commands::AddLocation { city, district } => vec![
            open(AppView::LocationManagement),
            Action::RealEstate(RealEstateAction::AddLocation(LocationForm { city, district })),
        ],
        Commands::DeleteLocation { id } => vec![
            open(AppView::LocationManagement),
            Action::RealEstate(RealEstateAction::DeleteLocation(id)),
        ],
        Commands::Services { select } => {
            let mut out = vec![open(AppView::ServicesManagement)];
            if let Some(id) = select {
                out.push(Action::Services(ServicesAction::Select(id)));
            }
            out
        }
        Commands::CreateServiceType { name } => vec![
            open(AppView::ServicesManagement),
            Action::Services(ServicesAction::CreateType(ServiceTypeForm { name })),
        ],
        Commands::DeleteServiceType { id } => vec![
            open(AppView::ServicesManagement),
            Action::Services(ServicesAction::DeleteType(id)),
        ],
        Commands::DeleteService { id, office } => vec![
            match office {
                Some(office) => open(AppView::Profile(office)),
                None => open(AppView::ServicesManagement),
            },
            Action::Services(ServicesAction::DeleteService(id)),
        ],
        Commands::Verifications { page } => verification_page(page),
        Commands::CreateVerification {
            national_no,
            identity_no,
            user_id,
            identity_image,
            contract_image,
        } => vec![
            open(AppView::VerificationForm),
            Action::Verification(VerificationAction::Create(VerificationForm {
                national_no,
                identity_no,
                user_id: Some(user_id),
                identity_image: Some(identity_image),
                contract_image: Some(contract_image),
            })),
        ],
        Commands::UpdateVerification { id, page, .. } => {
            let mut out = verification_page(page);
            out.push(Action::Verification(VerificationAction::BeginEdit(id)));
            out
        }
        Commands::DeleteVerification { id, page } => {
            let mut out = verification_page(page);
            out.push(Action::Verification(VerificationAction::Delete(id)));
            out
        }
        Commands::Properties {
            page,
            listing_type,
            kind,
            max_price,
            location,
        } => {
            let filtered = listing_type.is_some()
                || kind.is_some()
                || max_price.is_some()
                || location.is_some();
            let mut out = vec![open(AppView::Properties)];
            if filtered {
                out.push(Action::RealEstate(RealEstateAction::ApplyFilter(
                    PropertyFilter {
                        listing_type: listing_type.unwrap_or_default(),
                        kind: kind.unwrap_or_default(),
                        max_price: max_price.unwrap_or_default(),
                        location: location.unwrap_or_default(),
                    },
                )));
            }
            if page != 1 {
                out.push(Action::RealEstate(RealEstateAction::GoToPage(page)));
            }
            out
        }
        Commands::Property { id } => vec![open(AppView::PropertyDetails(id))],
        Commands::DeleteProperty { id, page, office } => {
            let mut out = match office {
                Some(office) => vec![open(AppView::Profile(office))],
                None => vec![open(AppView::Properties)],
            };
            if office.is_none() && page != 1 {
                out.push(Action::RealEstate(RealEstateAction::GoToPage(page)));
            }
            out.push(Action::RealEstate(RealEstateAction::DeleteProperty(id)));
            out
        }
        Commands::Profile { id } => vec![open(AppView::Profile(id))],
        Commands::Complaints { resolve } => {
            let mut out = vec![open(AppView::Complaints)];
            if let Some(id) = resolve {
                out.push(Action::Complaints(ComplaintsAction::MarkResolved(id)));
            }
            out
        }
        Commands::Config { .. } => Vec::new(),
    }
}
