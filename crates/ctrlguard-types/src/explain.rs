//! Explain registry for policy requirements.
//!
//! Maps requirement ids and their report labels to explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a requirement.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the requirement.
    pub title: &'static str,
    /// What the requirement looks for and how the heuristic decides.
    pub description: &'static str,
    /// How to satisfy it.
    pub remediation: &'static str,
    /// Before/after TypeScript examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would be reported.
    pub before: &'static str,
    /// Code that satisfies the requirement.
    pub after: &'static str,
}

/// Look up an explanation by requirement id or by its report label.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::REQ_LOGGER | ids::LABEL_LOGGER => Some(explain_logger()),
        ids::REQ_ERROR_HANDLING | ids::LABEL_ERROR_HANDLING => Some(explain_error_handling()),
        ids::REQ_OPERATION_DOC | ids::LABEL_OPERATION_DOC => Some(explain_operation_doc()),
        ids::REQ_RESPONSE_DOC | ids::LABEL_RESPONSE_DOC => Some(explain_response_doc()),
        ids::REQ_STATUS_SET | ids::LABEL_STATUS_SET => Some(explain_status_set()),
        ids::REQ_ACCESS_CONTROL | ids::LABEL_ACCESS_CONTROL => Some(explain_access_control()),
        _ => None,
    }
}

/// List all known requirement ids, in policy order.
pub fn all_requirement_ids() -> &'static [&'static str] {
    &[
        ids::REQ_LOGGER,
        ids::REQ_ERROR_HANDLING,
        ids::REQ_OPERATION_DOC,
        ids::REQ_RESPONSE_DOC,
        ids::REQ_STATUS_SET,
        ids::REQ_ACCESS_CONTROL,
    ]
}

/// List all known report labels, in policy order.
pub fn all_labels() -> &'static [&'static str] {
    &[
        ids::LABEL_LOGGER,
        ids::LABEL_ERROR_HANDLING,
        ids::LABEL_OPERATION_DOC,
        ids::LABEL_RESPONSE_DOC,
        ids::LABEL_STATUS_SET,
        ids::LABEL_ACCESS_CONTROL,
    ]
}

fn explain_logger() -> Explanation {
    Explanation {
        title: "Controller Logger",
        description: "\
Requires the controller to both reference `Logger` and construct one with `new Logger`.

A controller without its own logger cannot attribute failures to the request-handling unit
that produced them. Importing `Logger` without instantiating it does not count.",
        remediation: "\
Add a class-scoped logger named after the controller:

    private readonly logger = new Logger(OrdersController.name);",
        examples: ExamplePair {
            before: r#"@Controller('orders')
export class OrdersController {
  constructor(private readonly ordersService: OrdersService) {}
}"#,
            after: r#"import { Controller, Logger } from '@nestjs/common';

@Controller('orders')
export class OrdersController {
  private readonly logger = new Logger(OrdersController.name);

  constructor(private readonly ordersService: OrdersService) {}
}"#,
        },
    }
}

fn explain_error_handling() -> Explanation {
    Explanation {
        title: "Guarded Error Handling",
        description: "\
Requires at least one `try {` block somewhere in the controller.

Handlers that let service errors escape unlogged surface as opaque 500 responses. The check is
file-wide: one guarded handler satisfies it.",
        remediation: "\
Wrap service calls in `try { ... } catch (error) { ... }`, log the failure and rethrow a typed
HTTP exception.",
        examples: ExamplePair {
            before: r#"@Get()
findAll(@Request() req) {
  return this.ordersService.findAll(req.user.tenantId);
}"#,
            after: r#"@Get()
async findAll(@Request() req) {
  try {
    return await this.ordersService.findAll(req.user.tenantId);
  } catch (error) {
    this.logger.error('Failed to list orders', error.stack);
    throw error;
  }
}"#,
        },
    }
}

fn explain_operation_doc() -> Explanation {
    Explanation {
        title: "Operation Documentation",
        description: "\
Requires an `@ApiOperation` decorator somewhere in the controller.

Operation summaries are what the generated API reference shows for each endpoint.",
        remediation: "\
Decorate each handler with `@ApiOperation({ summary: '...' })`.",
        examples: ExamplePair {
            before: r#"@Get(':id')
findById(@Param('id') id: string) {}"#,
            after: r#"@Get(':id')
@ApiOperation({ summary: 'Get order by ID' })
findById(@Param('id') id: string) {}"#,
        },
    }
}

fn explain_response_doc() -> Explanation {
    Explanation {
        title: "Response Documentation",
        description: "\
Requires an `@ApiResponse` decorator somewhere in the controller.",
        remediation: "\
Document each handler's responses with `@ApiResponse({ status, description })`.",
        examples: ExamplePair {
            before: r#"@Get(':id')
@ApiOperation({ summary: 'Get order by ID' })
findById(@Param('id') id: string) {}"#,
            after: r#"@Get(':id')
@ApiOperation({ summary: 'Get order by ID' })
@ApiResponse({ status: 200, description: 'Order retrieved' })
findById(@Param('id') id: string) {}"#,
        },
    }
}

fn explain_status_set() -> Explanation {
    Explanation {
        title: "Documented Status Set",
        description: "\
Collects every `status: <number>` literal in the file and requires that:
- at least one success status (200 or 201) appears, and
- all of 400, 401, 403 and 500 appear.

The set is gathered across the whole file, not per endpoint: a controller passes when the union
of its documented statuses covers the required set, even if no single handler lists all of them.
This is a deliberate precision trade-off of the heuristic.",
        remediation: "\
Document the failure responses alongside the success response:

    @ApiResponse({ status: 400, description: 'Invalid input' })
    @ApiResponse({ status: 401, description: 'Unauthorized' })
    @ApiResponse({ status: 403, description: 'Forbidden' })
    @ApiResponse({ status: 500, description: 'Internal server error' })",
        examples: ExamplePair {
            before: r#"@ApiResponse({ status: 201, description: 'Created' })
@ApiResponse({ status: 400, description: 'Invalid input' })"#,
            after: r#"@ApiResponse({ status: 201, description: 'Created' })
@ApiResponse({ status: 400, description: 'Invalid input' })
@ApiResponse({ status: 401, description: 'Unauthorized' })
@ApiResponse({ status: 403, description: 'Forbidden' })
@ApiResponse({ status: 500, description: 'Internal server error' })"#,
        },
    }
}

fn explain_access_control() -> Explanation {
    Explanation {
        title: "Explicit Access Decision",
        description: "\
Requires either a guard attachment (`@UseGuards`) or an explicit public exemption (`@Public`)
somewhere in the controller.

Both count equally: the point is that someone decided who may call the endpoints.",
        remediation: "\
Attach the authentication guards at class level, or mark intentionally open endpoints with
`@Public()`.",
        examples: ExamplePair {
            before: r#"@Controller('categories')
export class CategoriesController {}"#,
            after: r#"@Controller('categories')
@UseGuards(JwtAuthGuard, TenantGuard)
export class CategoriesController {}"#,
        },
    }
}
