//! Failover from a primary generator to a secondary one

use async_trait::async_trait;
use log::{debug, warn};

use crate::error::Result;
use crate::generator::MaterialGenerator;
use crate::request::GenerationRequest;
use crate::Artifact;

/// One primary attempt, then at most one secondary attempt.
///
/// Only generation failures are routed to the secondary; any other
/// error is returned as is. There is no retry loop.
pub struct FailoverGenerator<P, S>
{   pub primary: P
  , pub secondary: S
}

impl<P, S> FailoverGenerator<P, S>
where
  P: MaterialGenerator
, S: MaterialGenerator
{   pub fn new(primary: P, secondary: S) -> Self
    {   debug!(
          "Creating failover {} -> {}",
          primary.name(), secondary.name()
        );
        FailoverGenerator { primary, secondary }
    }
}

#[async_trait]
impl<P, S> MaterialGenerator for FailoverGenerator<P, S>
where
  P: MaterialGenerator
, S: MaterialGenerator
{   async fn generate(&self, request: &GenerationRequest) -> Result<Artifact>
    {   match self.primary.generate(request).await
        {   Ok(artifact) => Ok(artifact)
          , Err(e) if e.is_generation_failure() => {
              warn!(
                "{} generator failed ({}), falling back to {}",
                self.primary.name(), e, self.secondary.name()
              );
              self.secondary.generate(request).await
            }
          , Err(e) => Err(e)
        }
    }

    fn name(&self) -> &'static str
    {   "failover"
    }
}
