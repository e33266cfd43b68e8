use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::blurring::domain::seam_blurrer::{EdgeOutcome, SeamBlurrer};
use crate::blurring::domain::strip_blurrer::StripBlurrer;
use crate::blurring::infrastructure::blurrer_factory::create_blurrer;
use crate::error::{Result, SeamBlendError};
use crate::geometry::quadrant::{Edge, Quadrant};
use crate::geometry::quadrant_plan::QuadrantPlan;
use crate::pipeline::infrastructure::quadrant_worker_pool::QuadrantWorkerPool;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::pipeline_stage::PipelineStage;
use crate::raster_io::domain::artifact_writer::ArtifactWriter;
use crate::raster_io::domain::raster_codec::RasterCodec;
use crate::raster_io::infrastructure::directory_artifact_writer::DirectoryArtifactWriter;
use crate::raster_io::infrastructure::image_codec::ImageCodec;
use crate::shared::config::SeamBlendConfig;
use crate::shared::raster::Raster;
use crate::tiling::quadrant_tile::QuadrantTile;
use crate::tiling::{compositor, segmenter};

/// A seam edge that was left unblurred, and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedEdge {
    pub quadrant: Quadrant,
    pub edge: Edge,
    pub reason: String,
}

/// Report of a successful run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeamBlendOutcome {
    pub success: bool,
    pub output_path: PathBuf,
    pub byte_size: usize,
    pub width: u32,
    pub height: u32,
    pub segment_paths: Vec<PathBuf>,
    pub skipped_edges: Vec<SkippedEdge>,
}

/// Fails with [`SeamBlendError::TooSmall`] when either side is below `min`.
pub fn validate_dimensions(width: u32, height: u32, min: u32) -> Result<()> {
    if width < min || height < min {
        return Err(SeamBlendError::TooSmall { width, height, min });
    }
    Ok(())
}

/// Quadrant seam-blending pipeline:
/// validate → segment → persist segments → blur → compose → persist result.
pub struct SeamBlendUseCase {
    codec: Box<dyn RasterCodec>,
    writer: Box<dyn ArtifactWriter>,
    seam_blurrer: SeamBlurrer,
    workers: QuadrantWorkerPool,
    min_dimension: u32,
    result_filename: String,
    logger: Box<dyn PipelineLogger>,
    stage: PipelineStage,
}

impl SeamBlendUseCase {
    pub fn new(
        codec: Box<dyn RasterCodec>,
        writer: Box<dyn ArtifactWriter>,
        blurrer: Box<dyn StripBlurrer>,
        config: &SeamBlendConfig,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            codec,
            writer,
            seam_blurrer: SeamBlurrer::new(blurrer, config.blur_offset),
            workers: QuadrantWorkerPool::new(config.worker_threads),
            min_dimension: config.min_dimension,
            result_filename: config.result_filename.clone(),
            logger,
            stage: PipelineStage::Validate,
        }
    }

    /// Wires the `image` codec, a directory writer rooted at
    /// `config.output_dir` and the configured blur backend.
    pub fn from_config(config: &SeamBlendConfig, logger: Box<dyn PipelineLogger>) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Box::new(ImageCodec::new()),
            Box::new(DirectoryArtifactWriter::new(&config.output_dir)),
            create_blurrer(config.blur_backend, config.blur_radius),
            config,
            logger,
        ))
    }

    /// Stage the last run reached: `Done`, `Failed`, or `Validate` before any run.
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Runs the whole pipeline on one encoded image buffer.
    pub fn execute(&mut self, input: &[u8]) -> Result<SeamBlendOutcome> {
        let result = self.run(input);
        match &result {
            Ok(outcome) => {
                self.advance();
                self.logger.info(&format!(
                    "Wrote {} ({} bytes)",
                    outcome.output_path.display(),
                    outcome.byte_size
                ));
            }
            Err(e) => {
                log::error!("Pipeline failed during {}: {e}", self.stage);
                self.enter(PipelineStage::Failed);
            }
        }
        self.logger.summary();
        result
    }

    fn run(&mut self, input: &[u8]) -> Result<SeamBlendOutcome> {
        self.enter(PipelineStage::Validate);
        let started = Instant::now();
        let source = self.codec.decode(input)?;
        validate_dimensions(source.width(), source.height(), self.min_dimension)?;
        let plan = QuadrantPlan::new(source.width(), source.height());
        self.finish(started);

        self.advance();
        let started = Instant::now();
        let tiles = self.segment(&source, &plan)?;
        drop(source);
        self.finish(started);

        self.advance();
        let started = Instant::now();
        let segment_paths = self.persist_segments(&tiles)?;
        self.finish(started);

        self.advance();
        let started = Instant::now();
        let (tiles, skipped_edges) = self.blur(tiles)?;
        self.finish(started);

        self.advance();
        let started = Instant::now();
        let composed = compositor::compose(plan.width(), plan.height(), &tiles)?;
        drop(tiles);
        self.finish(started);

        self.advance();
        let started = Instant::now();
        let bytes = self.codec.encode(&composed)?;
        let output_path = self.writer.write(&self.result_filename, &bytes)?;
        self.finish(started);

        Ok(SeamBlendOutcome {
            success: true,
            output_path,
            byte_size: bytes.len(),
            width: plan.width(),
            height: plan.height(),
            segment_paths,
            skipped_edges,
        })
    }

    fn segment(&self, source: &Raster, plan: &QuadrantPlan) -> Result<Vec<QuadrantTile>> {
        self.workers
            .map(plan.tiles().to_vec(), |(quadrant, rect)| {
                segmenter::extract(source, rect).map(|raster| QuadrantTile::new(quadrant, rect, raster))
            })?
            .into_iter()
            .collect()
    }

    /// Writes the raw tiles as `1.png..4.png`. A failed write is logged and
    /// left out of the returned paths.
    fn persist_segments(&mut self, tiles: &[QuadrantTile]) -> Result<Vec<PathBuf>> {
        let codec = &self.codec;
        let writer = &self.writer;
        let written = self.workers.map(tiles.iter().collect(), |tile: &QuadrantTile| {
            let name = tile.quadrant().segment_filename();
            let result = codec
                .encode(tile.raster())
                .and_then(|bytes| writer.write(&name, &bytes));
            (name, result)
        })?;

        let mut paths = Vec::with_capacity(written.len());
        for (name, result) in written {
            match result {
                Ok(path) => paths.push(path),
                Err(e) => self
                    .logger
                    .warn(&format!("Segment {name} not persisted: {e}")),
            }
        }
        Ok(paths)
    }

    /// Blurs every tile's seam edges. Skips are logged by the seam blurrer
    /// and only collected here.
    fn blur(&self, tiles: Vec<QuadrantTile>) -> Result<(Vec<QuadrantTile>, Vec<SkippedEdge>)> {
        let seam_blurrer = &self.seam_blurrer;
        let blurred = self.workers.map(tiles, |mut tile| {
            let edges = tile.quadrant().seam_edges();
            let outcomes = seam_blurrer.blur_edges(tile.raster_mut(), &edges);
            (tile, outcomes)
        })?;

        let mut tiles = Vec::with_capacity(blurred.len());
        let mut skipped = Vec::new();
        for (tile, outcomes) in blurred {
            for outcome in outcomes {
                if let EdgeOutcome::Skipped { edge, reason } = outcome {
                    skipped.push(SkippedEdge {
                        quadrant: tile.quadrant(),
                        edge,
                        reason,
                    });
                }
            }
            tiles.push(tile);
        }
        Ok((tiles, skipped))
    }

    /// Moves to the stage that follows the current one.
    fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            self.enter(next);
        }
    }

    fn enter(&mut self, stage: PipelineStage) {
        self.stage = stage;
        self.logger.stage(stage);
    }

    fn finish(&mut self, started: Instant) {
        let ms = started.elapsed().as_secs_f64() * 1000.0;
        self.logger.timing(self.stage, ms);
    }
}
