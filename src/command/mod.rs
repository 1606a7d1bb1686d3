pub mod translate;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Translate PrimeFlex 3.x classes to Tailwind CSS classes
    #[command(name = "pf2tw", visible_alias = "pf32tw")]
    Pf2tw(translate::TranslateArgs),

    /// Translate PrimeFlex 2.x classes to Tailwind CSS classes
    #[command(name = "pf22tw")]
    Pf22tw(translate::LegacyTranslateArgs),
}
