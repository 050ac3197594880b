use bastion_bridge::{DepositLedger, PendingDepositLedger};
use bastion_config::{Config, VerifierConfig, VerifiersConfig};
use bastion_primitives::prelude::*;
use bastion_proposer::{InitParams, OnChainProposer, ProposerParams};
use bastion_state::{commitment::BlockCommitment, events::ProposerEvent};
use bastion_verifier::{
    DigestVerifier, ProofBackend, ProofBundle, ProofPayload, VerifierBinding,
};
use serde::Serialize;
use tracing::*;

use crate::{
    errors::{InitError, StepError},
    script::Step,
};

/// Outcome of a whole replay.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub last_committed_block: u64,
    pub last_verified_block: u64,
    pub pending_deposits: usize,
    pub failed_steps: Vec<usize>,
    pub events: Vec<ProposerEvent>,
}

pub struct Replayer {
    proposer: OnChainProposer<PendingDepositLedger>,
    verifiers: VerifiersConfig,
    failed_steps: Vec<usize>,
    events: Vec<ProposerEvent>,
}

impl Replayer {
    /// Creates and initializes a proposer from the config, backed by an
    /// empty in-memory ledger and digest verifiers.
    pub fn from_config(config: &Config) -> Result<Self, InitError> {
        let params = ProposerParams::new(config.proposer.address, config.proposer.validium)
            .with_retain_history(config.proposer.retain_history);
        let mut proposer = OnChainProposer::new(params);

        proposer.initialize(InitParams {
            bridge_address: config.bridge.address,
            ledger: PendingDepositLedger::new(),
            verifiers: ProofBackend::ALL.map(|b| binding_from_config(config.verifiers.get(b))),
            sequencers: config.sequencers.clone(),
        })?;

        Ok(Self {
            proposer,
            verifiers: config.verifiers.clone(),
            failed_steps: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Runs one step.  Failures are recorded before being returned.
    pub fn run_step(&mut self, idx: usize, step: &Step) -> Result<(), StepError> {
        let res = self.run_step_inner(idx, step);
        self.events.extend(self.proposer.take_events());
        match &res {
            Ok(()) => info!(%idx, op = %step.name(), "step ok"),
            Err(e) => {
                warn!(%idx, op = %step.name(), err = %e, "step failed");
                self.failed_steps.push(idx);
            }
        }
        res
    }

    fn run_step_inner(&mut self, idx: usize, step: &Step) -> Result<(), StepError> {
        match step {
            Step::Deposit { recipient, amount } => {
                self.proposer
                    .record_deposit(*recipient, *amount as u128)
                    .map_err(|e| StepError::Proposer(idx, e))?;
                Ok(())
            }

            Step::Commit {
                caller,
                height,
                new_state_root,
                state_diff_commitment,
                deposit_logs_hash,
                deposit_count,
                withdrawals_root,
            } => {
                let deposits = match (deposit_logs_hash, deposit_count) {
                    (Some(hash), _) => *hash,
                    (None, Some(count)) => self.ledger_hash(idx, *count)?,
                    (None, None) => DepositLogsHash::zero(),
                };
                let commitment = BlockCommitment::new(
                    *new_state_root,
                    *state_diff_commitment,
                    deposits,
                    *withdrawals_root,
                );
                self.proposer
                    .commit(caller, *height, commitment)
                    .map_err(|e| StepError::Proposer(idx, e))
            }

            Step::Verify {
                caller,
                height,
                proofs,
            } => {
                let proofs = match proofs {
                    Some(p) => p.clone(),
                    None => {
                        let commitment = self
                            .proposer
                            .commitment_at(*height)
                            .ok_or(StepError::NoCommitment(idx, *height))?;
                        generate_proofs(&self.verifiers, *height, commitment)
                    }
                };
                self.proposer
                    .verify(caller, *height, &proofs)
                    .map_err(|e| StepError::Proposer(idx, e))
            }
        }
    }

    fn ledger_hash(&self, idx: usize, count: u16) -> Result<DepositLogsHash, StepError> {
        match self.proposer.ledger() {
            Some(ledger) => ledger
                .pending_deposits_hash(count)
                .map_err(|e| StepError::Bridge(idx, e)),
            None => Ok(DepositLogsHash::zero()),
        }
    }

    pub fn finish(self) -> Summary {
        Summary {
            last_committed_block: self.proposer.last_committed_block(),
            last_verified_block: self.proposer.last_verified_block(),
            pending_deposits: self.proposer.ledger().map_or(0, |l| l.pending_len()),
            failed_steps: self.failed_steps,
            events: self.events,
        }
    }
}

fn binding_from_config(cfg: &VerifierConfig) -> VerifierBinding {
    match cfg {
        VerifierConfig::Live {
            address,
            program_id,
        } => VerifierBinding::live(*address, DigestVerifier::new(*program_id)),
        VerifierConfig::Bypassed => VerifierBinding::Bypassed,
    }
}

/// Public inputs generated proofs commit to: the height followed by the
/// block's commitment fields.
pub fn public_inputs(height: u64, commitment: &BlockCommitment) -> Vec<u8> {
    let mut buf = height.to_be_bytes().to_vec();
    buf.extend_from_slice(commitment.new_state_root().as_slice());
    buf.extend_from_slice(commitment.state_diff_commitment().as_slice());
    buf.extend_from_slice(commitment.deposit_logs_hash().as_ref());
    buf
}

/// Generates a bundle the configured digest verifiers accept.  Bypassed
/// backends get an empty payload.
pub fn generate_proofs(
    verifiers: &VerifiersConfig,
    height: u64,
    commitment: &BlockCommitment,
) -> ProofBundle {
    let inputs = public_inputs(height, commitment);
    let [risc0, sp1, pico] = ProofBackend::ALL.map(|backend| match verifiers.get(backend) {
        VerifierConfig::Live { program_id, .. } => ProofPayload::new(
            *program_id,
            inputs.clone(),
            DigestVerifier::prove(program_id, &inputs),
        ),
        VerifierConfig::Bypassed => ProofPayload::default(),
    });
    ProofBundle::new(risc0, sp1, pico)
}
