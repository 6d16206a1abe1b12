use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "time_traveler=debug,warn"
    } else {
        "time_traveler=info"
    }
}

/// 日誌一律寫到 stderr，stdout 只留給計算結果；`json` 為 true 時輸出 JSON 行
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // 兩個分支各自的 Layer 位於不同的 subscriber 層，需分別推導型別參數 S
    fn base_layer<S>() -> tracing_subscriber::fmt::Layer<
        S,
        tracing_subscriber::fmt::format::DefaultFields,
        tracing_subscriber::fmt::format::Format,
        fn() -> std::io::Stderr,
    > {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr as fn() -> std::io::Stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    }

    // 兩種格式的 Layer 型別不同，用 Option 包起來只啟用其中一個
    let (json_layer, compact_layer) = if json {
        (Some(base_layer().json()), None)
    } else {
        (None, Some(base_layer().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}
