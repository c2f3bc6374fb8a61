use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// 并发执行一组future，同时运行的数量不超过max_concurrent
///
/// 返回结果与输入顺序一致。max_concurrent为0时不限制并发。
pub async fn do_parallel_with_limit<F, T>(futures: Vec<F>, max_concurrent: usize) -> Vec<T>
where
    F: Future<Output = T>,
{
    let permits = if max_concurrent == 0 {
        futures.len().max(1)
    } else {
        max_concurrent
    };
    let semaphore = Arc::new(Semaphore::new(permits));

    let limited = futures.into_iter().map(|future| {
        let semaphore = semaphore.clone();
        async move {
            // 信号量不会被关闭，acquire只会在关闭时失败
            let _permit = semaphore.acquire().await.ok();
            future.await
        }
    });

    join_all(limited).await
}
