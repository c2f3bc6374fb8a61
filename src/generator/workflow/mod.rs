use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::outlet::{DiskOutlet, Outlet, SavedRun};
use crate::generator::state::{BlogState, NextStage};
use crate::generator::{orchestrator, reducer, research, router, worker};
use crate::llm::client::LanguageModel;
use crate::search::WebSearch;
use crate::types::blog::BlogRequest;

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::Instrument;
use uuid::Uuid;

/// 时间跟踪作用域
pub struct TimingScope {
    start_time: Instant,
    phase_start_times: Vec<(&'static str, Instant)>,
    phase_durations: Vec<(&'static str, Duration)>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase_start_times: Vec::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &'static str) {
        self.phase_start_times.push((phase_name, Instant::now()));
    }

    /// 结束一个阶段的计时
    pub fn end_phase(&mut self, phase_name: &'static str) -> Option<Duration> {
        let index = self
            .phase_start_times
            .iter()
            .position(|(name, _)| *name == phase_name)?;
        let (_, started) = self.phase_start_times.remove(index);
        let duration = started.elapsed();
        self.phase_durations.push((phase_name, duration));
        Some(duration)
    }

    /// 获取总执行时间
    pub fn get_total_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 按结束顺序返回各阶段的执行时间
    pub fn get_phase_durations(&self) -> &[(&'static str, Duration)] {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let mut report = format!(
            "总执行时间: {:.2}秒\n",
            self.get_total_duration().as_secs_f64()
        );

        if !self.phase_durations.is_empty() {
            report.push_str("\n各阶段执行时间:\n");
            for (phase, duration) in &self.phase_durations {
                report.push_str(&format!("- {}: {:.3}秒\n", phase, duration.as_secs_f64()));
            }
        }

        report
    }
}

/// 阶段名称
pub struct TimingKeys;

impl TimingKeys {
    pub const ROUTER: &'static str = "router";
    pub const RESEARCH: &'static str = "research";
    pub const ORCHESTRATOR: &'static str = "orchestrator";
    pub const WORKERS: &'static str = "workers";
    pub const REDUCER: &'static str = "reducer";
}

/// 一次运行的结果
pub struct RunReport {
    pub run_id: Uuid,
    pub state: BlogState,
    pub saved: SavedRun,
    pub timing: TimingScope,
}

/// 执行完整流水线：路由 → (调研) → 规划 → 并行写作 → 归并
pub async fn run_pipeline<M, S, O>(
    context: &GeneratorContext<M, S>,
    outlet: &O,
    request: &BlogRequest,
) -> Result<RunReport>
where
    M: LanguageModel,
    S: WebSearch,
    O: Outlet,
{
    let run_id = Uuid::new_v4();
    let (state, saved, timing) = execute_stages(context, outlet, request)
        .instrument(tracing::info_span!("run", %run_id))
        .await?;

    Ok(RunReport {
        run_id,
        state,
        saved,
        timing,
    })
}

async fn execute_stages<M, S, O>(
    context: &GeneratorContext<M, S>,
    outlet: &O,
    request: &BlogRequest,
) -> Result<(BlogState, SavedRun, TimingScope)>
where
    M: LanguageModel,
    S: WebSearch,
    O: Outlet,
{
    tracing::info!(topic = %request.topic, as_of = %request.as_of, "🚀 开始生成文章");

    let mut timing = TimingScope::new();
    let mut state = BlogState::new(request);

    timing.start_phase(TimingKeys::ROUTER);
    router::execute(context, &mut state).await;
    timing.end_phase(TimingKeys::ROUTER);

    if state.route_next() == NextStage::Research {
        timing.start_phase(TimingKeys::RESEARCH);
        research::execute(context, &mut state).await?;
        timing.end_phase(TimingKeys::RESEARCH);
    }

    timing.start_phase(TimingKeys::ORCHESTRATOR);
    orchestrator::execute(context, &mut state).await?;
    timing.end_phase(TimingKeys::ORCHESTRATOR);

    timing.start_phase(TimingKeys::WORKERS);
    worker::execute(context, &mut state).await?;
    timing.end_phase(TimingKeys::WORKERS);

    timing.start_phase(TimingKeys::REDUCER);
    let saved = reducer::execute(outlet, &mut state).await?;
    timing.end_phase(TimingKeys::REDUCER);

    tracing::info!("✅ 文章生成完成\n{}", timing.generate_timing_report());

    Ok((state, saved, timing))
}

/// 启动文章生成工作流
pub async fn launch(config: &Config, request: &BlogRequest) -> Result<RunReport> {
    let context = GeneratorContext::new(config.clone())?;
    let outlet = DiskOutlet::new(config.output_root.clone());
    run_pipeline(&context, &outlet, request).await
}
