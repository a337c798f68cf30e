use quiz_editor::QuizEditorApp;
use quiz_editor::config::EditorConfig;
use quiz_editor::data::seed_store;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use quiz_editor::store::FileStore;

    pretty_env_logger::init();

    let config = EditorConfig::from_env();
    let mut store = FileStore::new(&config.store_path);
    if config.seed_if_empty {
        seed_store(&mut store);
    }
    log::info!("almacén de quizzes: {}", store.path().display());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz Editor",
        options,
        Box::new(move |cc| {
            Ok(Box::new(QuizEditorApp::from_creation_context(
                cc,
                Box::new(store),
                config.initial_quiz,
            )))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use quiz_editor::store::LocalStorageStore;
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let config = EditorConfig::from_env();
    let mut store = LocalStorageStore::default();
    if config.seed_if_empty {
        seed_store(&mut store);
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas 'the_canvas_id'");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    Ok(Box::new(QuizEditorApp::from_creation_context(
                        cc,
                        Box::new(store),
                        config.initial_quiz,
                    )))
                }),
            )
            .await;

        if let Err(e) = result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
