use crate::model::{AuditModel, ControllerSignals};
use crate::signals::SignalSet;
use ctrlguard_types::RepoPath;

/// A controller that carries exactly one instance of every required marker.
pub fn compliant_controller() -> String {
    r#"import { Controller, Get, Logger, UseGuards } from '@nestjs/common';
import { ApiOperation, ApiResponse } from '@nestjs/swagger';

@Controller('orders')
@UseGuards(JwtAuthGuard)
export class OrdersController {
  private readonly logger = new Logger(OrdersController.name);

  @Get()
  @ApiOperation({ summary: 'List orders' })
  @ApiResponse({ status: 200, description: 'ok' })
  @ApiResponse({ status: 400, description: 'bad request' })
  @ApiResponse({ status: 401, description: 'unauthorized' })
  @ApiResponse({ status: 403, description: 'forbidden' })
  @ApiResponse({ status: 500, description: 'server error' })
  async findAll() {
    try {
      return await this.ordersService.findAll();
    } catch (error) {
      this.logger.error('list failed');
      throw error;
    }
  }
}
"#
    .to_string()
}

/// Drop every line containing `marker`.
pub fn without(text: &str, marker: &str) -> String {
    text.lines()
        .filter(|l| !l.contains(marker))
        .map(|l| format!("{l}\n"))
        .collect()
}

pub fn controller(path: &str, signals: SignalSet) -> ControllerSignals {
    ControllerSignals {
        path: RepoPath::new(path),
        signals,
    }
}

pub fn model(discovered: &[&str], controllers: Vec<ControllerSignals>) -> AuditModel {
    AuditModel {
        discovered: discovered.iter().map(RepoPath::new).collect(),
        controllers,
    }
}
