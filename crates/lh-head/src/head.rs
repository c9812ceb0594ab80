//! A pipetting head: a slot for one adaptor plus how it takes tips.

use lh_channel::ChannelParameter;
use lh_core::WellCoords;
use lh_labware::{Tip, Tipbox};
use lh_tips::TipLoadingBehaviour;
use tracing::debug;

use crate::{Adaptor, HeadError, HeadResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Head {
    pub name:        String,
    pub params:      ChannelParameter,
    pub tip_loading: TipLoadingBehaviour,
    adaptor:         Option<Adaptor>,
}

impl Head {
    pub fn new(name: impl Into<String>, params: ChannelParameter) -> Self {
        Self {
            name: name.into(),
            params,
            tip_loading: TipLoadingBehaviour::default(),
            adaptor: None,
        }
    }

    pub fn with_tip_loading(mut self, tip_loading: TipLoadingBehaviour) -> Self {
        self.tip_loading = tip_loading;
        self
    }

    /// Fit `adaptor`, returning whichever one was fitted before.
    pub fn load_adaptor(&mut self, adaptor: Adaptor) -> Option<Adaptor> {
        self.adaptor.replace(adaptor)
    }

    pub fn unload_adaptor(&mut self) -> Option<Adaptor> {
        self.adaptor.take()
    }

    pub fn adaptor(&self) -> Option<&Adaptor> {
        self.adaptor.as_ref()
    }

    pub fn adaptor_mut(&mut self) -> Option<&mut Adaptor> {
        self.adaptor.as_mut()
    }

    pub(crate) fn require_adaptor(&self) -> HeadResult<&Adaptor> {
        self.adaptor.as_ref().ok_or_else(|| HeadError::NoAdaptor(self.name.clone()))
    }

    /// Plan a pickup of `num` tips from `tipbox` with this head's
    /// tip-loading behaviour.  No single pass may exceed the channel count.
    pub fn plan_tip_pickup(&self, tipbox: &mut Tipbox, num: usize) -> HeadResult<Vec<Vec<WellCoords>>> {
        let channels = self.require_adaptor()?.channel_count();
        if num > channels {
            return Err(HeadError::TooManyTips { requested: num, available: channels });
        }
        Ok(self.tip_loading.get_behaviour(tipbox, num)?)
    }

    /// Plan, take, and fit `num` tips, one pickup pass after another.
    ///
    /// Each pass fills the lowest-numbered empty channels.  Free channels are
    /// counted before planning, so a head that cannot take `num` tips leaves
    /// the rack untouched, even with auto-refill on.
    pub fn load_tips_from(&mut self, tipbox: &mut Tipbox, num: usize) -> HeadResult<usize> {
        let free = self.require_adaptor()?.tips().iter().filter(|t| t.is_none()).count();
        if free < num {
            return Err(HeadError::TooManyTips { requested: num, available: free });
        }
        let plan = self.plan_tip_pickup(tipbox, num)?;

        let tips = tipbox.take_planned(&plan).map_err(lh_tips::TipError::from)?;
        let adaptor = self
            .adaptor
            .as_mut()
            .ok_or_else(|| HeadError::NoAdaptor(self.name.clone()))?;

        let mut incoming = tips.into_iter();
        let loads: Vec<Option<Tip>> = adaptor
            .tips()
            .iter()
            .map(|held| if held.is_none() { incoming.next() } else { None })
            .collect();
        adaptor.load_tips(loads)?;

        debug!(head = %self.name, num, passes = plan.len(), "loaded tips");
        Ok(plan.len())
    }
}
