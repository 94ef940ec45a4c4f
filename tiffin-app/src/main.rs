use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shared::models::MealType;
use shared::validation::{MenuForm, PasswordChangeForm, SignupForm};
use tiffin_app::screens::account::{self, ProfileScreen};
use tiffin_app::screens::analytics::AnalyticsScreen;
use tiffin_app::screens::auth::{AuthScreen, PendingOtp};
use tiffin_app::screens::customer::{
    CustomerHome, FavoritesScreen, MenuScreen, OrdersScreen, ProvidersScreen,
};
use tiffin_app::screens::launch::launch;
use tiffin_app::screens::provider::{ProviderHome, ProviderMenuScreen, ProviderOrdersScreen};
use tiffin_app::{AppContext, Config, Failure, Landing, Route, ScreenResult, init_logger_with_file};

#[derive(Parser)]
#[command(name = "tiffin", version, about = "Order and manage home-style tiffin meals")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "TIFFIN_API_URL")]
    api_url: Option<String>,
    /// Directory for the saved session and settings
    #[arg(long, env = "TIFFIN_DATA_DIR")]
    data_dir: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show who is signed in and where the app would open
    Status,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a customer account and email an OTP
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        address: String,
    },
    /// Email an OTP to an existing account
    RequestOtp {
        #[arg(long)]
        email: String,
    },
    /// Verify an OTP; pass the signup details again for a new account
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp: String,
        #[arg(long, requires_all = ["mobile", "password", "address"])]
        name: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    ResendOtp {
        #[arg(long)]
        email: String,
    },
    Logout,
    Profile,
    /// Switch between light and dark theme
    Theme,
    /// Change password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    Contact {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Customer dashboard
    Home,
    /// Today's menus
    Menus,
    /// Place an order, items as `meal:sabji:qty` (e.g. `full:Paneer:2`, `riceOnly::1`)
    Order {
        #[arg(long)]
        menu: String,
        #[arg(long = "item", required = true)]
        items: Vec<ItemArg>,
    },
    /// Your orders, optionally for one day (YYYY-MM-DD)
    Orders {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    Providers {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Add or remove a favorite provider
    Favorite { provider_id: String },
    Favorites,
    /// Provider dashboard
    ProviderHome,
    /// Your published menus
    MyMenus,
    /// Publish a menu (date defaults to today)
    CreateMenu {
        #[arg(long)]
        date: Option<String>,
        #[arg(long = "sabji", required = true)]
        sabjis: Vec<String>,
        #[arg(long)]
        full: String,
        #[arg(long)]
        half: String,
        #[arg(long)]
        rice_only: String,
    },
    DeleteMenu { menu_id: String },
    /// Orders placed with you
    Incoming,
    /// Move an order to its next status
    Advance { order_id: String },
    /// Cancel a pending order
    Cancel { order_id: String },
    Analytics {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
}

/// One order line from the command line
#[derive(Debug, Clone)]
struct ItemArg {
    meal_type: MealType,
    sabji: Option<String>,
    quantity: u32,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let meal_type: MealType = parts.next().unwrap_or_default().parse()?;
        let sabji = parts
            .next()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let quantity = match parts.next() {
            Some(q) => q.trim().parse().map_err(|_| format!("invalid quantity: {q}"))?,
            None => 1,
        };
        Ok(Self {
            meal_type,
            sabji,
            quantity,
        })
    }
}

/// Turn a screen failure into a CLI error
fn report<T>(result: ScreenResult<T>) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(Failure::Silent) => bail!("Not signed in. Run `tiffin login` first."),
        Err(Failure::Alert(message)) => bail!(message),
    }
}

fn print_route(route: Route) {
    match route {
        Route::Login => println!("Please log in"),
        Route::CustomerHome => println!("Opening customer home"),
        Route::ProviderHome => println!("Opening provider home"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.log_json |= cli.log_json;

    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "starting");

    let ctx = AppContext::from_config(&config).context("failed to create client")?;
    ctx.session().restore().await;

    run(&ctx, cli.command).await
}

async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Status => {
            let route = launch(ctx).await;
            if let Some(user) = ctx.session().current_user().await {
                println!("Signed in as {} <{}> ({:?})", user.name, user.email, user.role);
            }
            print_route(route);
        }
        Command::Login { email, password } => {
            let route = report(AuthScreen::new().login(ctx, &email, &password).await)?;
            println!("Login successful");
            print_route(route);
        }
        Command::Signup {
            name,
            email,
            mobile,
            password,
            address,
        } => {
            let form = SignupForm {
                name,
                email,
                mobile,
                password,
                address,
            };
            let message = report(AuthScreen::new().signup(ctx, form).await)?;
            println!("{message}");
            println!("Run `tiffin verify` with the code and the same details to finish");
        }
        Command::RequestOtp { email } => {
            println!("{}", report(AuthScreen::new().request_otp(ctx, &email).await)?);
        }
        Command::Verify {
            email,
            otp,
            name,
            mobile,
            password,
            address,
        } => {
            let signup = match (name, mobile, password, address) {
                (Some(name), Some(mobile), Some(password), Some(address)) => Some(SignupForm {
                    name,
                    email: email.clone(),
                    mobile,
                    password,
                    address,
                }),
                _ => None,
            };
            let mut screen = AuthScreen::with_pending(PendingOtp { email, signup });
            print_route(report(screen.verify_otp(ctx, &otp).await)?);
        }
        Command::ResendOtp { email } => {
            let screen = AuthScreen::with_pending(PendingOtp { email, signup: None });
            println!("{}", report(screen.resend_otp(ctx).await)?);
        }
        Command::Logout => {
            print_route(report(ProfileScreen::logout(ctx).await)?);
        }
        Command::Profile => {
            let profile = report(ProfileScreen::load(ctx).await)?;
            let user = &profile.user;
            println!("{} <{}>", user.name, user.email);
            if let Some(mobile) = &user.mobile {
                println!("Mobile: {mobile}");
            }
            if let Some(address) = &user.address {
                println!("Address: {address}");
            }
            println!("Theme: {}", profile.theme.mode.as_str());
        }
        Command::Theme => {
            let theme = report(ctx.toggle_theme().await)?;
            println!("Theme: {}", theme.mode.as_str());
        }
        Command::Password { current, new, confirm } => {
            let form = PasswordChangeForm {
                current_password: current,
                new_password: new,
                confirm_password: confirm,
            };
            println!("{}", report(account::change_password(ctx, &form).await)?);
        }
        Command::Contact { subject, message } => {
            println!("{}", report(account::send_contact(ctx, &subject, &message).await)?);
        }
        Command::Home => {
            let home = report(CustomerHome::load(ctx).await)?;
            println!("{}", home.greeting());
            match home.todays_menus {
                Some(count) => println!("{count} menu(s) available today"),
                None => println!("Menus unavailable"),
            }
        }
        Command::Menus => {
            let mut screen = MenuScreen::new();
            report(screen.load(ctx).await)?;
            if screen.menus().is_empty() {
                println!("No menus available today");
            }
            for menu in screen.menus() {
                println!(
                    "{}  {}  sabjis: {}  full {} / half {} / rice {}",
                    menu.id,
                    menu.provider_name().unwrap_or("Provider"),
                    menu.sabjis.join(", "),
                    menu.prices.full,
                    menu.prices.half,
                    menu.prices.rice_only,
                );
            }
        }
        Command::Order { menu, items } => {
            let mut screen = MenuScreen::new();
            report(screen.load(ctx).await)?;
            report(screen.select(&menu).map(|_| ()))?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    report(screen.add_item())?;
                }
                report(screen.set_meal_type(index, item.meal_type))?;
                if let Some(sabji) = &item.sabji {
                    report(screen.set_sabji(index, sabji))?;
                }
                report(screen.set_quantity(index, item.quantity))?;
            }
            println!("Total: {}", screen.total());
            let order = report(screen.place_order(ctx).await)?;
            println!("Order placed successfully! #{}", order.display_id());
        }
        Command::Orders { date } => {
            let mut screen = OrdersScreen::new();
            report(screen.filter_by(ctx, date).await)?;
            if screen.rows().is_empty() {
                println!("No orders yet");
            }
            for row in screen.rows() {
                println!(
                    "#{}  {} {}  {}  total {}",
                    row.display_id(),
                    row.style.icon,
                    row.style.label,
                    row.order.provider_name(),
                    row.order.grand_total,
                );
            }
        }
        Command::Providers { search } => {
            let mut screen = ProvidersScreen::new();
            report(screen.load(ctx).await)?;
            screen.query = search;
            for row in screen.rows() {
                let star = if row.is_favorite { "*" } else { " " };
                println!("{star} {}  {} <{}>", row.provider.id, row.provider.name, row.provider.email);
            }
        }
        Command::Favorite { provider_id } => {
            let mut screen = ProvidersScreen::new();
            report(screen.load(ctx).await)?;
            let now_favorite = report(screen.toggle_favorite(ctx, &provider_id).await)?;
            println!(
                "{}",
                if now_favorite { "Added to favorites" } else { "Removed from favorites" }
            );
        }
        Command::Favorites => {
            let mut screen = FavoritesScreen::new();
            report(screen.load(ctx).await)?;
            if screen.providers().is_empty() {
                println!("No favorite providers yet");
            }
            for provider in screen.providers() {
                println!("{}  {} <{}>", provider.id, provider.name, provider.email);
            }
        }
        Command::ProviderHome => match report(ProviderHome::load(ctx).await)? {
            Landing::Show(home) => println!("{}", home.greeting()),
            Landing::Redirect(route) => print_route(route),
        },
        Command::MyMenus => {
            let mut screen = ProviderMenuScreen::new();
            report(screen.load(ctx).await)?;
            for menu in screen.menus() {
                println!(
                    "{}  {}  {}",
                    menu.id,
                    menu.date.as_deref().unwrap_or("-"),
                    menu.sabjis.join(", ")
                );
            }
        }
        Command::CreateMenu {
            date,
            sabjis,
            full,
            half,
            rice_only,
        } => {
            let mut screen = ProviderMenuScreen::new();
            let editor = screen.start_create();
            let today = std::mem::take(&mut editor.form.date);
            editor.form = MenuForm {
                date: date.unwrap_or(today),
                sabjis,
                full_price: full,
                half_price: half,
                rice_only_price: rice_only,
            };
            println!("{}", report(screen.save(ctx).await)?);
        }
        Command::DeleteMenu { menu_id } => {
            let mut screen = ProviderMenuScreen::new();
            println!("{}", report(screen.delete(ctx, &menu_id).await)?);
        }
        Command::Incoming => {
            let mut screen = ProviderOrdersScreen::new();
            report(screen.load(ctx).await)?;
            for order in screen.orders() {
                let style = screen.status_style(ctx, order).await;
                let action = screen
                    .next_action(order)
                    .map(|(_, label)| label)
                    .unwrap_or("-");
                println!(
                    "#{}  {}  {} {}  total {}  next: {}",
                    order.display_id(),
                    order.customer_name(),
                    style.icon,
                    style.label,
                    order.grand_total,
                    action,
                );
            }
        }
        Command::Advance { order_id } => {
            let mut screen = ProviderOrdersScreen::new();
            report(screen.load(ctx).await)?;
            let status = report(screen.advance(ctx, &order_id).await)?;
            println!("Order status updated: {}", status.label());
        }
        Command::Cancel { order_id } => {
            let mut screen = ProviderOrdersScreen::new();
            report(screen.load(ctx).await)?;
            let status = report(screen.cancel(ctx, &order_id).await)?;
            println!("Order status updated: {}", status.label());
        }
        Command::Analytics { year, month } => {
            let (current_year, current_month) = shared::analytics::current_period();
            let screen = report(
                AnalyticsScreen::load_period(
                    ctx,
                    year.unwrap_or(current_year),
                    month.unwrap_or(current_month),
                )
                .await,
            )?;
            print_analytics(&screen);
        }
    }
    Ok(())
}

fn print_analytics(screen: &AnalyticsScreen) {
    match &screen.summary {
        tiffin_app::Loadable::Loaded(s) => println!(
            "Revenue {} from {} orders (today {} / {}), {} pending",
            s.total_revenue, s.total_orders, s.today_revenue, s.today_orders, s.pending_orders
        ),
        tiffin_app::Loadable::Failed(e) => println!("Summary: {e}"),
    }
    match &screen.growth {
        tiffin_app::Loadable::Loaded(g) => println!("Growth: {:.1}%", g.growth_rate),
        tiffin_app::Loadable::Failed(e) => println!("Growth: {e}"),
    }
    match &screen.average_order_value {
        tiffin_app::Loadable::Loaded(a) => println!("Average order: {:.2}", a.average_order_value),
        tiffin_app::Loadable::Failed(e) => println!("Average order: {e}"),
    }
    if let Some(e) = screen.monthly.error() {
        println!("Monthly revenue: {e}");
    } else {
        let values = screen.monthly_values();
        let line: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{} {}", shared::chart::month_label(i as u32 + 1), v))
            .collect();
        println!("Monthly revenue {}: {}", screen.year, line.join(", "));
    }
    if let Some(e) = screen.daily.error() {
        println!("Daily revenue: {e}");
    } else {
        let total: f64 = screen.daily_values().iter().sum();
        println!("Revenue {}-{:02}: {}", screen.year, screen.month, total);
    }
    match &screen.best_sellers {
        tiffin_app::Loadable::Loaded(items) => {
            for (rank, item) in items.iter().enumerate() {
                let sabji = item.sabji.as_deref().unwrap_or("");
                println!(
                    "{}. {} {}  x{}  {}",
                    rank + 1,
                    item.meal_type.label(),
                    sabji,
                    item.quantity,
                    item.revenue
                );
            }
        }
        tiffin_app::Loadable::Failed(e) => println!("Best sellers: {e}"),
    }
}
