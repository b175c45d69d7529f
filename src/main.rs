use iced::keyboard;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod source;
mod state;
mod ui;

use config::{GalleryConfig, LogLevel};
use source::asset::AssetKind;
use source::probe::SourceProbe;
use source::{metadata, GallerySource, SiteRoot};
use state::catalog::Catalog;
use state::filter::{CategoryFilter, FilterBar};
use state::grid::GalleryGrid;
use state::navigator::{ModalNavigator, NavCommand};

/// Main application state
struct PortfolioGallery {
    config: GalleryConfig,
    /// Where metadata and images are read from
    source: GallerySource,
    /// The current catalog; replaced whole on every rebuild
    catalog: Arc<Catalog>,
    filters: FilterBar,
    grid: GalleryGrid,
    navigator: ModalNavigator,
    /// Decoded images for the current catalog
    handles: ui::Handles,
    /// Incremented per build; results from older builds are dropped
    generation: u64,
    /// A build is in flight
    loading: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Refresh"
    Refresh,
    /// User clicked "Open Folder"
    OpenFolder,
    /// Background build finished
    CatalogBuilt(u64, Arc<Catalog>),
    /// An image finished loading (None if it couldn't be read)
    AssetLoaded(u64, String, Option<ui::Picture>),
    /// Layout has settled after a build; reveal the tiles
    RevealTiles(u64),
    FilterSelected(CategoryFilter),
    /// Open the modal on a subcategory group
    OpenGroup(String),
    /// Open the modal on one photo
    OpenPhoto(String),
    /// Keyboard or modal button command
    Navigate(NavCommand),
}

impl PortfolioGallery {
    /// Create a new instance of the application and start the first build
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let source = GallerySource::from_config(&config).unwrap_or_else(|e| {
            log::warn!("⚠️  {}; falling back to the current directory", e);
            GallerySource::new(
                SiteRoot::Local(".".into()),
                &config.metadata_file,
                &config.gallery_dir,
            )
        });

        log::info!("🎨 Portfolio Gallery reading from {}", source.root());

        let mut gallery = PortfolioGallery {
            config,
            source,
            catalog: Arc::new(Catalog::default()),
            filters: FilterBar::default(),
            grid: GalleryGrid::default(),
            navigator: ModalNavigator::new(),
            handles: ui::Handles::new(),
            generation: 0,
            loading: false,
            status: String::new(),
        };
        let task = gallery.start_build();

        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => {
                if self.loading {
                    log::info!("⏳ Refresh ignored: a build is already running");
                    return Task::none();
                }
                self.start_build()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Portfolio Site Folder")
                    .pick_folder();

                match folder {
                    Some(folder) => {
                        self.source = self.source.with_root(SiteRoot::Local(folder));
                        // Supersedes any build still running for the old root
                        self.start_build()
                    }
                    None => Task::none(),
                }
            }
            Message::CatalogBuilt(generation, catalog) => {
                if generation != self.generation {
                    log::debug!("Dropping stale catalog from build {}", generation);
                    return Task::none();
                }
                self.install_catalog(catalog)
            }
            Message::AssetLoaded(generation, path, picture) => {
                if generation == self.generation {
                    if let Some(picture) = picture {
                        self.handles.insert(path, picture);
                    }
                }
                Task::none()
            }
            Message::RevealTiles(generation) => {
                if generation == self.generation {
                    self.grid.reveal();
                }
                Task::none()
            }
            Message::FilterSelected(filter) => {
                self.filters.select(filter);
                Task::none()
            }
            Message::OpenGroup(key) => {
                self.navigator.open_series(&self.catalog, &key, 0);
                Task::none()
            }
            Message::OpenPhoto(path) => {
                self.navigator.open_record(&self.catalog, &path);
                Task::none()
            }
            Message::Navigate(command) => {
                self.navigator.apply(&self.catalog, command);
                Task::none()
            }
        }
    }

    /// Kick off a catalog build for the current source
    fn start_build(&mut self) -> Task<Message> {
        self.generation += 1;
        self.loading = true;
        self.status = format!("Loading gallery from {}...", self.source.root());

        let generation = self.generation;
        Task::perform(build_catalog_async(self.source.clone()), move |catalog| {
            Message::CatalogBuilt(generation, Arc::new(catalog))
        })
    }

    /// Swap in a freshly built catalog and derive everything that depends on it
    fn install_catalog(&mut self, catalog: Arc<Catalog>) -> Task<Message> {
        self.loading = false;
        self.catalog = catalog;
        self.navigator.close();
        self.filters = FilterBar::from_catalog(&self.catalog);
        self.grid = GalleryGrid::from_catalog(&self.catalog);
        self.handles.clear();

        self.status = if self.catalog.is_empty() {
            "No images in gallery.".to_string()
        } else {
            format!("✅ {} images in gallery.", self.catalog.len())
        };

        let generation = self.generation;
        let delay = Duration::from_millis(self.config.reveal_delay_ms);
        let reveal = Task::perform(tokio::time::sleep(delay), move |_| {
            Message::RevealTiles(generation)
        });

        let loads = self.catalog.images().iter().map(|record| {
            Task::perform(
                load_handle_async(self.source.clone(), record.path.clone()),
                move |(path, picture)| Message::AssetLoaded(generation, path, picture),
            )
        });

        Task::batch(std::iter::once(reveal).chain(loads))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Portfolio Gallery").size(40),
            horizontal_space(),
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
            button("Refresh")
                .on_press_maybe((!self.loading).then_some(Message::Refresh))
                .padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            header,
            text(&self.status).size(14),
            ui::filter_bar::view(&self.filters),
            ui::grid::view(&self.grid, &self.catalog, &self.filters, &self.handles),
        ]
        .spacing(20)
        .padding(32);

        let page = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        match ui::modal::view(&self.navigator, &self.catalog, &self.handles) {
            Some(modal) => ui::modal::overlay(page, modal, Message::Navigate(NavCommand::Close)),
            None => page.into(),
        }
    }

    /// Keyboard navigation is only listened to while the modal is open
    fn subscription(&self) -> Subscription<Message> {
        if self.navigator.is_open() {
            keyboard::on_key_press(|key, _modifiers| {
                NavCommand::from_key(&key).map(Message::Navigate)
            })
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    let config = GalleryConfig::load();
    init_logging(config.log_level);

    iced::application(
        "Portfolio Gallery",
        PortfolioGallery::update,
        PortfolioGallery::view,
    )
    .theme(PortfolioGallery::theme)
    .subscription(PortfolioGallery::subscription)
    .centered()
    .run_with(move || PortfolioGallery::new(config))
}

/// Configured level, overridden by RUST_LOG when set
fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();
}

/// Load metadata, probe every asset and index what exists.
/// Runs on the async executor; never fails, an unreachable site is an empty gallery.
async fn build_catalog_async(source: GallerySource) -> Catalog {
    log::info!("🔍 Building catalog from {}", source.root());

    let raw = metadata::load_metadata(&source).await;
    let gallery_dir = source.gallery_dir().to_string();
    let probe = Arc::new(SourceProbe::new(source));

    Catalog::build(raw, &gallery_dir, probe).await
}

/// Read one image for display
async fn load_handle_async(source: GallerySource, path: String) -> (String, Option<ui::Picture>) {
    match source.read(&path).await {
        Ok(bytes) => {
            let kind = AssetKind::detect(&path, &bytes);
            (path, Some(ui::Picture::from_bytes(kind, bytes)))
        }
        Err(e) => {
            log::warn!("⚠️  Could not load {}: {}", path, e);
            (path, None)
        }
    }
}
