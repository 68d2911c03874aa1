mod config;
mod quiz;

use std::sync::Arc;

use dotenv::dotenv;
use log::debug;
use quiz::{QuestionBank, QuizEngine, QuizSession};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
};

type QuizDialogue = Dialogue<QuizSession, ErasedStorage<QuizSession>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

type SessionStorage = Arc<ErasedStorage<QuizSession>>;

#[tokio::main]
async fn main() -> HandlerResult {
    // A missing .env is fine, the variables may come from the environment
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting quiz bot...");

    let config = config::Config::from_env()?;
    let bot = Bot::from_env();

    log::info!("Opening session storage at {}", config.db_path);
    let storage: SessionStorage = SqliteStorage::open(&config.db_path, Json)
        .await?
        .erase();

    log::info!("Loading questions from {}", config.questions_path.display());
    let bank = QuestionBank::load(&config.questions_path)?;
    let engine = Arc::new(QuizEngine::new(bank).with_first_turn(config.first_turn));
    log::info!(
        "Loaded {} questions, first turn policy: {:?}",
        engine.bank().len(),
        config.first_turn
    );

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<QuizSession>, QuizSession>()
            .endpoint(quiz_turn),
    )
    .dependencies(dptree::deps![storage, engine])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

async fn quiz_turn(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    engine: Arc<QuizEngine>,
    msg: Message,
) -> HandlerResult {
    // Stickers, photos and the like count as a blank answer
    let answer = msg.text().unwrap_or_default();
    debug!("Chat {}: received {:?}", msg.chat.id.0, answer);

    let replies = engine.handle(answer, &mut session)?;
    if session.take_pending_save() {
        dialogue.update(session).await?;
    }

    for reply in replies {
        bot.send_message(msg.chat.id, reply).await?;
    }
    Ok(())
}
