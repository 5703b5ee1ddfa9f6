fn main() -> anyhow::Result<()> {
    reservoir_observability::init();

    let outcomes = reservoir_selftest::run_all();
    let failed = outcomes.iter().filter(|o| !o.passed()).count();

    tracing::info!(total = outcomes.len(), failed, "self-test finished");

    if failed > 0 {
        anyhow::bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    Ok(())
}
