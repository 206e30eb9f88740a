use crate::task_executor::{TaskExecutor, TaskReport};

/// Runs every task and returns one report per task, in batch order.
///
/// Sequential mode awaits each invocation before starting the next.
/// Parallel mode spawns every invocation at once and joins them all before
/// returning; completion order across tasks is unspecified. In both modes a
/// failed invocation is recorded in its report and never stops the rest.
pub async fn dispatch(
    tasks: Vec<TaskExecutor>,
    parallel: bool,
) -> color_eyre::Result<Vec<TaskReport>> {
    if parallel {
        dispatch_in_parallel(tasks).await
    } else {
        Ok(dispatch_sequentially(tasks).await)
    }
}

async fn dispatch_sequentially(tasks: Vec<TaskExecutor>) -> Vec<TaskReport> {
    tracing::debug!("dispatching {} batches sequentially", tasks.len());
    let mut reports = Vec::with_capacity(tasks.len());
    for task in tasks {
        reports.push(task.execute().await);
    }
    reports
}

async fn dispatch_in_parallel(tasks: Vec<TaskExecutor>) -> color_eyre::Result<Vec<TaskReport>> {
    tracing::debug!("dispatching {} batches in parallel", tasks.len());
    let handles = tasks
        .into_iter()
        .map(|task| tokio::spawn(task.execute()))
        .collect::<Vec<_>>();
    let mut reports = Vec::with_capacity(handles.len());
    for joined in futures::future::join_all(handles).await {
        reports.push(joined?);
    }
    Ok(reports)
}
